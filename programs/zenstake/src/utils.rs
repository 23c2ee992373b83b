use anchor_lang::prelude::*;

use crate::constants::{BASIS_POINTS_DIVISOR, DAY_IN_SECONDS};
use crate::error::MeditationError;

// utility functions shared across instructions and state

/// Index of the day period a timestamp falls into, counted from plan start.
pub fn day_index(start_at: i64, timestamp: i64) -> i64 {
    (timestamp - start_at) / DAY_IN_SECONDS
}

/// End of the commitment window for a plan starting at `start_at`.
pub fn end_timestamp(start_at: i64, number_of_days: u8) -> i64 {
    start_at + number_of_days as i64 * DAY_IN_SECONDS
}

/// Computes `amount * numerator / denominator` with u128 intermediate math,
/// rounding down.
pub fn mul_div(amount: u64, numerator: u64, denominator: u64) -> Result<u64> {
    require!(denominator > 0, MeditationError::DivideByZero);

    let scaled = (amount as u128)
        .checked_mul(numerator as u128)
        .ok_or(MeditationError::MathOverflow)?
        / denominator as u128;

    u64::try_from(scaled).map_err(|_| MeditationError::MathOverflow.into())
}

/// The basis-point share of an amount, rounding down.
pub fn bps_of(amount: u64, rate_bps: u16) -> Result<u64> {
    mul_div(amount, rate_bps as u64, BASIS_POINTS_DIVISOR)
}
