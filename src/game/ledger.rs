//! Credit ledger
//!
//! Holds the session balance. Every mutation goes through a signed delta
//! (negative for the spin debit, positive for a win) and both the delta and
//! the stored balance are rounded to one decimal place.

use crate::consts::STARTING_CREDIT;

/// Round to one decimal; ties go toward positive infinity, so a half-tenth
/// debit rounds to the smaller debit.
fn round_tenths(amount: f64) -> f64 {
    (amount * 10.0 + 0.5).floor() / 10.0
}

/// The player's credit balance.
///
/// Non-negativity is not enforced here; bet validation in the session gates
/// every debit, so the balance stays non-negative under correct use.
#[derive(Debug, Clone)]
pub struct Ledger {
    balance: f64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self { balance: STARTING_CREDIT }
    }
}

impl Ledger {
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Apply a signed credit delta, rounding both the delta and the
    /// resulting balance to one decimal.
    pub fn apply_delta(&mut self, delta: f64) {
        self.balance = round_tenths(self.balance + round_tenths(delta));
    }

    /// Back to the fixed starting credit.
    pub fn reset(&mut self) {
        self.balance = STARTING_CREDIT;
    }
}
