use anchor_lang::prelude::*;

use crate::constants::BASIS_POINTS_DIVISOR;
use crate::error::MeditationError;
use crate::utils::{bps_of, mul_div};

/// Program-wide configuration and aggregate counters.
#[account]
#[derive(InitSpace)]
pub struct MeditationProgram {
    pub authority: Pubkey,
    pub bump: u8,
    pub token_mint: Pubkey,
    pub min_stake: u64,
    pub max_stake: u64,
    pub policy: SettlementPolicy,
    pub total_plans: u64,
    pub total_staked: u64,
}

/// Settlement parameters, all expressed in basis points.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct SettlementPolicy {
    /// Completion rate at or above which the full stake is returned and a
    /// reward is credited
    pub success_threshold_bps: u16,
    /// Reward credited on a qualifying settlement, as a share of the stake
    pub reward_rate_bps: u16,
    /// Share of the missed portion of the stake that is forfeited
    pub penalty_rate_bps: u16,
}

/// Final amounts fixed by a settlement.
///
/// `stake_returned + penalties` always equals the escrowed stake; `rewards`
/// is sourced from the treasury pool, never from escrowed principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub stake_returned: u64,
    pub penalties: u64,
    pub rewards: u64,
}

impl SettlementPolicy {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.success_threshold_bps as u64 <= BASIS_POINTS_DIVISOR,
            MeditationError::InvalidPolicy
        );
        require!(
            self.reward_rate_bps as u64 <= BASIS_POINTS_DIVISOR,
            MeditationError::InvalidPolicy
        );
        require!(
            self.penalty_rate_bps as u64 <= BASIS_POINTS_DIVISOR,
            MeditationError::InvalidPolicy
        );
        Ok(())
    }

    /// Splits an escrowed stake into returned principal, penalties, and
    /// rewards given how many of the expected attestations were recorded.
    pub fn settle(&self, commitment_stake: u64, expected: u64, actual: u64) -> Result<Settlement> {
        let actual = actual.min(expected);
        let completion_bps = mul_div(actual, BASIS_POINTS_DIVISOR, expected)?;

        if completion_bps >= self.success_threshold_bps as u64 {
            let rewards = bps_of(commitment_stake, self.reward_rate_bps)?;
            return Ok(Settlement {
                stake_returned: commitment_stake,
                penalties: 0,
                rewards,
            });
        }

        let missed = expected - actual;
        let missed_share = mul_div(commitment_stake, missed, expected)?;
        let penalties = bps_of(missed_share, self.penalty_rate_bps)?;
        let stake_returned = commitment_stake
            .checked_sub(penalties)
            .ok_or(MeditationError::MathOverflow)?;

        Ok(Settlement {
            stake_returned,
            penalties,
            rewards: 0,
        })
    }
}
