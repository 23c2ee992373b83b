use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::MeditationError;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize {}

/// Bootstrap entry point: confirms the program is reachable. Not part of the
/// commitment state machine.
pub fn initialize(_ctx: Context<Initialize>) -> Result<()> {
    msg!("zenstake program online");
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeProgram<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + MeditationProgram::INIT_SPACE,
        seeds = [PROGRAM_SEED],
        bump
    )]
    pub meditation_program: Account<'info, MeditationProgram>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = authority,
        seeds = [TREASURY_SEED],
        bump,
        token::mint = token_mint,
        token::authority = meditation_program
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn initialize_program(
    ctx: Context<InitializeProgram>,
    min_stake: u64,
    max_stake: u64,
    success_threshold_bps: u16,
    reward_rate_bps: u16,
    penalty_rate_bps: u16,
) -> Result<()> {
    require!(
        min_stake <= max_stake,
        MeditationError::InvalidCommitmentStakeAmount
    );

    let policy = SettlementPolicy {
        success_threshold_bps,
        reward_rate_bps,
        penalty_rate_bps,
    };
    policy.validate()?;

    let program = &mut ctx.accounts.meditation_program;
    program.authority = ctx.accounts.authority.key();
    program.bump = ctx.bumps.meditation_program;
    program.token_mint = ctx.accounts.token_mint.key();
    program.min_stake = min_stake;
    program.max_stake = max_stake;
    program.policy = policy;
    program.total_plans = 0;
    program.total_staked = 0;

    Ok(())
}
