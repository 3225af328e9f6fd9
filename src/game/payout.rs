//! Payout evaluation
//!
//! A pure mapping from a three-symbol result and a bet to a win amount and
//! label. Table declaration order is the tie-break: the first matching
//! entry wins, and that order must not be replaced with a different rule
//! (e.g. highest payout first).

use crate::consts::{PAIR_PAYOUT_DIVISOR, SPECIAL_BONUS};

use super::symbols::{BONUS_GLYPH, SYMBOLS};

/// How a spin won (or didn't).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinKind {
    ThreeOfAKind,
    TwoOfAKind,
    /// The moon showed up at least once with no better match
    MoonBonus,
    Miss,
}

/// Result of one completed spin. Immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    /// The three settled glyphs, in reel order
    pub symbols: [char; 3],
    /// Win amount, floored to one decimal; 0 on a miss
    pub win: f64,
    pub kind: WinKind,
    /// Multiplier applied to the bet (0 on a miss)
    pub multiplier: f64,
}

impl SpinOutcome {
    /// Human-readable tag for the result banner.
    pub fn label(&self) -> String {
        match self.kind {
            WinKind::ThreeOfAKind => format!("Three of a kind! x{}", self.multiplier),
            WinKind::TwoOfAKind => format!("Two of a kind! x{}", self.multiplier),
            WinKind::MoonBonus => format!("Moon bonus! x{}", self.multiplier),
            WinKind::Miss => "No win".to_string(),
        }
    }

    pub fn is_win(&self) -> bool {
        self.win > 0.0
    }
}

/// Floor to one decimal place, the quantization applied to every win
/// before it reaches the ledger.
fn floor_tenths(amount: f64) -> f64 {
    (amount * 10.0).floor() / 10.0
}

/// Evaluate a settled three-symbol result against the paytable.
///
/// Match bonus: first table entry appearing three times pays its full
/// multiplier; otherwise the first appearing twice pays a fifth of it.
/// The moon glyph anywhere in the result is worth x1.5 on its own, paid
/// only when it beats the match bonus.
pub fn evaluate(symbols: [char; 3], bet: f64) -> SpinOutcome {
    let mut kind = WinKind::Miss;
    let mut match_bonus = 0.0;

    for sym in &SYMBOLS {
        let count = symbols.iter().filter(|&&g| g == sym.glyph).count();
        if count == 3 {
            kind = WinKind::ThreeOfAKind;
            match_bonus = sym.payout;
            break;
        }
    }

    if kind == WinKind::Miss {
        for sym in &SYMBOLS {
            let count = symbols.iter().filter(|&&g| g == sym.glyph).count();
            if count == 2 {
                kind = WinKind::TwoOfAKind;
                match_bonus = sym.payout / PAIR_PAYOUT_DIVISOR;
                break;
            }
        }
    }

    let special_bonus = if symbols.contains(&BONUS_GLYPH) {
        SPECIAL_BONUS
    } else {
        0.0
    };

    let (kind, multiplier) = if match_bonus > 0.0 && match_bonus >= special_bonus {
        (kind, match_bonus)
    } else if special_bonus > 0.0 {
        (WinKind::MoonBonus, special_bonus)
    } else {
        (WinKind::Miss, 0.0)
    };

    SpinOutcome {
        symbols,
        win: floor_tenths(bet * multiplier),
        kind,
        multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_three_of_a_kind() {
        // Sun pays x50
        let out = evaluate(['日', '日', '日'], 2.0);
        assert_eq!(out.kind, WinKind::ThreeOfAKind);
        assert_eq!(out.multiplier, 50.0);
        assert_eq!(out.win, 100.0);
        assert_eq!(out.label(), "Three of a kind! x50");
    }

    #[test]
    fn test_two_of_a_kind_pays_a_fifth() {
        // Venus pays x15, pair pays x3
        let out = evaluate(['金', '金', '土'], 5.0);
        assert_eq!(out.kind, WinKind::TwoOfAKind);
        assert_eq!(out.multiplier, 3.0);
        assert_eq!(out.win, 15.0);
    }

    #[test]
    fn test_moon_bonus_without_pair() {
        let out = evaluate(['月', '火', '土'], 2.0);
        assert_eq!(out.kind, WinKind::MoonBonus);
        assert_eq!(out.multiplier, 1.5);
        assert_eq!(out.win, 3.0);
    }

    #[test]
    fn test_match_bonus_beats_moon_bonus() {
        // Saturn pair pays x1.0, below the moon's x1.5
        let out = evaluate(['土', '土', '月'], 10.0);
        assert_eq!(out.kind, WinKind::MoonBonus);
        assert_eq!(out.win, 15.0);

        // Moon pair pays x2.0, above its own x1.5 special
        let out = evaluate(['月', '月', '土'], 10.0);
        assert_eq!(out.kind, WinKind::TwoOfAKind);
        assert_eq!(out.multiplier, 2.0);
        assert_eq!(out.win, 20.0);
    }

    #[test]
    fn test_all_distinct_no_moon_is_a_miss() {
        let out = evaluate(['日', '火', '土'], 100.0);
        assert_eq!(out.kind, WinKind::Miss);
        assert_eq!(out.win, 0.0);
        assert_eq!(out.label(), "No win");
    }

    #[test]
    fn test_win_floored_to_one_decimal() {
        // 0.3 * 1.5 = 0.45, floored to 0.4
        let out = evaluate(['月', '火', '土'], 0.3);
        assert_eq!(out.win, 0.4);
    }

    #[test]
    fn test_moon_three_of_a_kind_uses_full_payout() {
        let out = evaluate(['月', '月', '月'], 1.0);
        assert_eq!(out.kind, WinKind::ThreeOfAKind);
        assert_eq!(out.multiplier, 10.0);
    }

    fn any_glyph() -> impl Strategy<Value = char> {
        (0usize..crate::game::symbols::SYMBOLS.len())
            .prop_map(|i| crate::game::symbols::SYMBOLS[i].glyph)
    }

    proptest! {
        #[test]
        fn prop_win_never_negative(
            a in any_glyph(), b in any_glyph(), c in any_glyph(),
            bet in 0.1f64..1000.0,
        ) {
            let out = evaluate([a, b, c], bet);
            prop_assert!(out.win >= 0.0);
        }

        #[test]
        fn prop_win_quantized_to_tenths(
            a in any_glyph(), b in any_glyph(), c in any_glyph(),
            bet in 0.1f64..1000.0,
        ) {
            let out = evaluate([a, b, c], bet);
            let tenths = out.win * 10.0;
            let frac = tenths.fract();
            prop_assert!(frac < 1e-6 || frac > 1.0 - 1e-6, "win {} not quantized", out.win);
        }

        #[test]
        fn prop_triple_always_three_of_a_kind(a in any_glyph(), bet in 0.1f64..1000.0) {
            let out = evaluate([a, a, a], bet);
            prop_assert_eq!(out.kind, WinKind::ThreeOfAKind);
            prop_assert!(out.is_win());
        }
    }
}
