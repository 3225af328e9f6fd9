//! The spin resolution engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Tick-driven animation, no timers of its own
//! - No rendering, DOM, or audio dependencies

pub mod ledger;
pub mod payout;
pub mod reel;
pub mod sampler;
pub mod session;
pub mod symbols;

pub use ledger::Ledger;
pub use payout::{SpinOutcome, WinKind, evaluate};
pub use reel::{Reel, ReelState};
pub use session::{BetError, BetSpec, GameSession, MachinePhase, StopEvent};
pub use symbols::{BONUS_GLYPH, SYMBOLS, Symbol};
