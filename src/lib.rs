//! Earth Slots - a planetary slot-machine mini-game
//!
//! Core modules:
//! - `game`: Deterministic spin engine (sampler, reels, payout, ledger)
//! - `audio`: Web Audio beep synthesis (wasm only)
//! - `settings`: Player preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod game;
pub mod settings;

pub use game::{BetError, BetSpec, GameSession, MachinePhase, SpinOutcome, StopEvent};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Number of reels on the machine
    pub const REEL_COUNT: usize = 3;
    /// Credit balance at startup and after a reset
    pub const STARTING_CREDIT: f64 = 20.0;
    /// Reel animation cadence in milliseconds
    pub const TICK_MS: f64 = 60.0;
    /// Multiplier paid when the moon shows up with no better match
    pub const SPECIAL_BONUS: f64 = 1.5;
    /// A pair pays the symbol's payout divided by this
    pub const PAIR_PAYOUT_DIVISOR: f64 = 5.0;
}
