//! The fixed symbol table
//!
//! Eight planetary symbols with appearance weights and payout multipliers.
//! Declaration order is load-bearing: the payout evaluator scans the table
//! top-to-bottom and takes the first match.

/// One entry of the symbol table, immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Symbol {
    /// Single-character glyph identifying the symbol
    pub glyph: char,
    /// English name, used for logging and alt text
    pub name: &'static str,
    /// Icon asset rendered by the presentation layer
    pub icon: &'static str,
    /// Selection weight (strictly positive)
    pub weight: u32,
    /// Three-of-a-kind payout multiplier (strictly positive)
    pub payout: f64,
}

/// The symbol table, rarest first. Weights sum to 79.
pub const SYMBOLS: [Symbol; 8] = [
    Symbol { glyph: '日', name: "sun", icon: "sun.svg", weight: 2, payout: 50.0 },
    Symbol { glyph: '水', name: "mercury", icon: "mercury.svg", weight: 4, payout: 25.0 },
    Symbol { glyph: '金', name: "venus", icon: "venus.svg", weight: 7, payout: 15.0 },
    Symbol { glyph: '地', name: "earth", icon: "earth.svg", weight: 8, payout: 12.0 },
    Symbol { glyph: '月', name: "moon", icon: "moon.svg", weight: 10, payout: 10.0 },
    Symbol { glyph: '火', name: "mars", icon: "mars.svg", weight: 12, payout: 8.0 },
    Symbol { glyph: '木', name: "jupiter", icon: "jupiter.svg", weight: 16, payout: 6.0 },
    Symbol { glyph: '土', name: "saturn", icon: "saturn.svg", weight: 20, payout: 5.0 },
];

/// Glyph that triggers the special bonus when it appears anywhere in a result
pub const BONUS_GLYPH: char = '月';

/// Look up a table entry by glyph
pub fn by_glyph(glyph: char) -> Option<&'static Symbol> {
    SYMBOLS.iter().find(|s| s.glyph == glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_unique() {
        for (i, a) in SYMBOLS.iter().enumerate() {
            for b in &SYMBOLS[i + 1..] {
                assert_ne!(a.glyph, b.glyph);
            }
        }
    }

    #[test]
    fn test_weights_and_payouts_positive() {
        for sym in &SYMBOLS {
            assert!(sym.weight > 0, "{} has zero weight", sym.name);
            assert!(sym.payout > 0.0, "{} has non-positive payout", sym.name);
        }
    }

    #[test]
    fn test_bonus_glyph_in_table() {
        let moon = by_glyph(BONUS_GLYPH).unwrap();
        assert_eq!(moon.name, "moon");
    }

    #[test]
    fn test_lookup_unknown_glyph() {
        assert!(by_glyph('?').is_none());
    }
}
