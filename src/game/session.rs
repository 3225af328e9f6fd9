//! Spin orchestration
//!
//! `GameSession` owns everything a round touches: the ledger, the three
//! reels, the machine phase, and a seeded RNG. One session per player; no
//! globals. Only one spin is ever in flight, and a started spin can end
//! only by stopping all three reels - there is no cancellation and no
//! timeout.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::REEL_COUNT;

use super::ledger::Ledger;
use super::payout::{self, SpinOutcome};
use super::reel::{Reel, ReelState};
use super::sampler;

/// Whole-machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachinePhase {
    /// Ready to accept a spin
    Idle,
    /// Reels rolling; stop actions are being consumed
    Spinning,
}

/// How much to wager on a spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BetSpec {
    Amount(f64),
    /// Bet the entire current balance
    AllIn,
}

/// Why a spin request was refused. No state changes on any of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BetError {
    /// Bet is NaN (e.g. an unparseable input field)
    NotANumber,
    NonPositive,
    InsufficientCredit { bet: f64, balance: f64 },
    /// A spin is already in flight
    SpinInProgress,
}

impl BetError {
    /// Message surfaced to the player.
    pub fn message(&self) -> &'static str {
        match self {
            BetError::NotANumber | BetError::NonPositive => "Enter a valid bet.",
            BetError::InsufficientCredit { .. } => "Not enough energy.",
            BetError::SpinInProgress => "Reels are still rolling.",
        }
    }
}

/// What a stop action did.
#[derive(Debug, Clone, PartialEq)]
pub enum StopEvent {
    /// One reel settled; more remain rolling
    ReelSettled { reel: usize, glyph: char },
    /// The last reel settled and the spin resolved
    SpinComplete { reel: usize, glyph: char, outcome: SpinOutcome, balance: f64 },
}

/// One player's machine: ledger, reels, and spin state.
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: MachinePhase,
    reels: [Reel; REEL_COUNT],
    /// Next reel to stop this round (0..=REEL_COUNT)
    stop_index: usize,
    /// Bet debited for the spin in flight
    bet: f64,
    ledger: Ledger,
    rng: Pcg32,
    seed: u64,
}

impl GameSession {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: MachinePhase::Idle,
            reels: [Reel::default(); REEL_COUNT],
            stop_index: 0,
            bet: 0.0,
            ledger: Ledger::default(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    pub fn phase(&self) -> MachinePhase {
        self.phase
    }

    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn reel_state(&self, reel: usize) -> ReelState {
        self.reels[reel].state()
    }

    /// Validate and start a spin: debit the bet, draw the three targets,
    /// set all reels rolling. Rejections leave the session untouched.
    pub fn request_spin(&mut self, spec: BetSpec) -> Result<(), BetError> {
        if self.phase != MachinePhase::Idle {
            return Err(BetError::SpinInProgress);
        }

        let balance = self.ledger.balance();
        let bet = match spec {
            BetSpec::Amount(amount) => amount,
            BetSpec::AllIn => balance,
        };
        if bet.is_nan() {
            return Err(BetError::NotANumber);
        }
        if bet <= 0.0 {
            return Err(BetError::NonPositive);
        }
        if bet > balance {
            return Err(BetError::InsufficientCredit { bet, balance });
        }

        self.ledger.apply_delta(-bet);
        self.bet = bet;
        self.stop_index = 0;

        for reel in &mut self.reels {
            let target = sampler::draw(&mut self.rng);
            reel.start(target.glyph);
        }
        self.phase = MachinePhase::Spinning;

        log::debug!("spin started: bet {bet:.1}, balance {:.1}", self.ledger.balance());
        Ok(())
    }

    /// One animation frame: a transient display glyph for each reel that is
    /// still rolling. Driven by the presentation layer at ~60ms cadence.
    pub fn tick(&mut self) -> [Option<char>; REEL_COUNT] {
        let mut frames = [None; REEL_COUNT];
        for (frame, reel) in frames.iter_mut().zip(&self.reels) {
            *frame = reel.spin_frame(&mut self.rng);
        }
        frames
    }

    /// Stop the next not-yet-stopped reel, in fixed order 0, 1, 2. A no-op
    /// (`None`) when idle or all reels already stopped. Stopping the last
    /// reel resolves the spin: the outcome is evaluated, any win is
    /// credited, and the machine returns to `Idle`.
    pub fn request_stop(&mut self) -> Option<StopEvent> {
        if self.phase != MachinePhase::Spinning || self.stop_index >= REEL_COUNT {
            return None;
        }

        let reel = self.stop_index;
        let glyph = self.reels[reel].stop();
        self.stop_index += 1;

        if self.stop_index < REEL_COUNT {
            return Some(StopEvent::ReelSettled { reel, glyph });
        }

        // All reels settled; resolve the spin.
        let symbols = [
            self.reels[0].settled_glyph().unwrap_or(glyph),
            self.reels[1].settled_glyph().unwrap_or(glyph),
            self.reels[2].settled_glyph().unwrap_or(glyph),
        ];
        let outcome = payout::evaluate(symbols, self.bet);
        if outcome.is_win() {
            self.ledger.apply_delta(outcome.win);
        }
        self.phase = MachinePhase::Idle;

        log::info!(
            "spin resolved: {:?} -> {} (+{:.1}), balance {:.1}",
            symbols,
            outcome.label(),
            outcome.win,
            self.ledger.balance()
        );

        Some(StopEvent::SpinComplete {
            reel,
            glyph,
            outcome,
            balance: self.ledger.balance(),
        })
    }

    /// Reset the balance to the starting credit. Refused mid-spin.
    pub fn reset_ledger(&mut self) -> bool {
        if self.phase != MachinePhase::Idle {
            return false;
        }
        self.ledger.reset();
        true
    }
}
