//! Linear, checkpoint-based reward accrual.
//!
//! A position earns
//!
//! ```text
//! amount * rate * elapsed / (period * RATE_SCALE)
//! ```
//!
//! reward-token units since its last checkpoint, where `rate` is the pool
//! rate captured at that checkpoint. With `RATE_SCALE` in basis points, a
//! rate of `10_000` pays the whole principal once per elapsed lock period.

use soroban_sdk::{Env, I256};

use crate::positions::Position;

/// Fixed-point denominator for pool reward rates (basis points).
pub const RATE_SCALE: i128 = 10_000;

/// Reward earned by `position` between its last checkpoint and `now`.
///
/// The product `amount * rate * elapsed` is taken in 256 bits, where it
/// cannot overflow for any `i128` amount, `u32` rate and `u64` elapsed time.
/// Returns `None` only when the final quotient does not fit in `i128`, or
/// for a `period` of zero, which the period registry never admits.
pub fn accrued(env: &Env, position: &Position, period: u64, now: u64) -> Option<i128> {
    if position.amount <= 0 || position.reward_rate == 0 {
        return Some(0);
    }

    let elapsed = now.saturating_sub(position.last_checkpoint);
    if elapsed == 0 {
        return Some(0);
    }
    if period == 0 {
        return None;
    }

    let numerator = I256::from_i128(env, position.amount)
        .mul(&I256::from_i128(env, i128::from(position.reward_rate)))
        .mul(&I256::from_i128(env, i128::from(elapsed)));
    let denominator = I256::from_i128(env, i128::from(period) * RATE_SCALE);

    numerator.div(&denominator).to_i128()
}
