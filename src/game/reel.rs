//! Per-reel animation/suspension state machine
//!
//! A reel is `Idle` until a spin starts, `Rolling` while the player watches
//! it churn, and `Settled` once stopped on its pre-chosen target. Rolling
//! never ends on its own - stopping is always user-driven, one reel per
//! stop action.

use rand::Rng;

use super::sampler;

/// Lifecycle of a single reel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReelState {
    /// Waiting for the next spin
    Idle,
    /// Churning; `target` is where this reel will settle when stopped
    Rolling { target: char },
    /// Stopped on its final glyph for this spin
    Settled { glyph: char },
}

/// One reel of the machine.
#[derive(Debug, Clone, Copy)]
pub struct Reel {
    state: ReelState,
}

impl Default for Reel {
    fn default() -> Self {
        Self { state: ReelState::Idle }
    }
}

impl Reel {
    pub fn state(&self) -> ReelState {
        self.state
    }

    pub fn is_rolling(&self) -> bool {
        matches!(self.state, ReelState::Rolling { .. })
    }

    /// Final glyph, once settled.
    pub fn settled_glyph(&self) -> Option<char> {
        match self.state {
            ReelState::Settled { glyph } => Some(glyph),
            _ => None,
        }
    }

    /// Begin rolling toward `target`. Starting an already-rolling reel is a
    /// programmer error; the session's phase tracking prevents it.
    pub fn start(&mut self, target: char) {
        debug_assert!(!self.is_rolling(), "reel started while rolling");
        self.state = ReelState::Rolling { target };
    }

    /// One animation frame: a transient uniformly-random glyph while
    /// rolling, independent of the target. `None` when not rolling.
    pub fn spin_frame<R: Rng>(&self, rng: &mut R) -> Option<char> {
        match self.state {
            ReelState::Rolling { .. } => Some(sampler::display_glyph(rng)),
            _ => None,
        }
    }

    /// Halt the churn and settle on the target glyph. Stopping a
    /// non-rolling reel is a programmer error; the session's stop index
    /// prevents it.
    pub fn stop(&mut self) -> char {
        let ReelState::Rolling { target } = self.state else {
            debug_assert!(false, "reel stopped while not rolling");
            return match self.state {
                ReelState::Settled { glyph } => glyph,
                _ => super::symbols::SYMBOLS[0].glyph,
            };
        };
        self.state = ReelState::Settled { glyph: target };
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_reel_lifecycle() {
        let mut reel = Reel::default();
        assert_eq!(reel.state(), ReelState::Idle);

        reel.start('月');
        assert!(reel.is_rolling());
        assert_eq!(reel.settled_glyph(), None);

        let glyph = reel.stop();
        assert_eq!(glyph, '月');
        assert_eq!(reel.settled_glyph(), Some('月'));

        // Settled reels can be re-armed for the next spin
        reel.start('日');
        assert!(reel.is_rolling());
    }

    #[test]
    fn test_spin_frame_only_while_rolling() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut reel = Reel::default();
        assert_eq!(reel.spin_frame(&mut rng), None);

        reel.start('土');
        for _ in 0..50 {
            assert!(reel.spin_frame(&mut rng).is_some());
        }

        reel.stop();
        assert_eq!(reel.spin_frame(&mut rng), None);
    }

    #[test]
    fn test_stop_ignores_display_churn() {
        // The settled glyph is the pre-chosen target, never the churn
        let mut rng = Pcg32::seed_from_u64(2);
        let mut reel = Reel::default();
        reel.start('日');
        for _ in 0..10 {
            reel.spin_frame(&mut rng);
        }
        assert_eq!(reel.stop(), '日');
    }
}
