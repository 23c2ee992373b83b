#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("2CtuoT57oHimWwPKCmP8NL5DaKNzqcFi2yqpXYYEgSxN");

#[program]
pub mod zenstake {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn initialize_program(
        ctx: Context<InitializeProgram>,
        min_stake: u64,
        max_stake: u64,
        success_threshold_bps: u16,
        reward_rate_bps: u16,
        penalty_rate_bps: u16,
    ) -> Result<()> {
        instructions::initialize_program(
            ctx,
            min_stake,
            max_stake,
            success_threshold_bps,
            reward_rate_bps,
            penalty_rate_bps,
        )
    }

    pub fn create_plan(
        ctx: Context<CreatePlan>,
        id: u64,
        number_of_days: u8,
        daily_frequency: u8,
        duration_minutes: u8,
        commitment_stake: u64,
    ) -> Result<()> {
        instructions::create_plan(
            ctx,
            id,
            number_of_days,
            daily_frequency,
            duration_minutes,
            commitment_stake,
        )
    }

    pub fn attest(ctx: Context<Attest>, started_at: i64, ended_at: i64) -> Result<()> {
        instructions::attest(ctx, started_at, ended_at)
    }

    pub fn settle(ctx: Context<Settle>) -> Result<()> {
        instructions::settle(ctx)
    }
}
