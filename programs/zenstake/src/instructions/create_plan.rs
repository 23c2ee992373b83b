use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::MeditationError;
use crate::events::PlanCreated;
use crate::state::*;
use crate::utils::end_timestamp;

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct CreatePlan<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + MeditationPlan::INIT_SPACE,
        seeds = [PLAN_SEED, owner.key().as_ref(), &id.to_le_bytes()],
        bump
    )]
    pub meditation_plan: Account<'info, MeditationPlan>,

    #[account(
        mut,
        seeds = [PROGRAM_SEED],
        bump = meditation_program.bump
    )]
    pub meditation_program: Account<'info, MeditationProgram>,

    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        constraint = owner_token_account.owner == owner.key() @ MeditationError::UnauthorizedAccess,
        constraint = owner_token_account.mint == meditation_program.token_mint @ MeditationError::InvalidMint
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = owner,
        seeds = [VAULT_SEED, owner.key().as_ref(), &id.to_le_bytes()],
        bump,
        token::mint = token_mint,
        token::authority = meditation_plan
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(address = meditation_program.token_mint @ MeditationError::InvalidMint)]
    pub token_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn create_plan(
    ctx: Context<CreatePlan>,
    id: u64,
    number_of_days: u8,
    daily_frequency: u8,
    duration_minutes: u8,
    commitment_stake: u64,
) -> Result<()> {
    // all parameter validation happens before any token movement
    require!(
        (MIN_NUMBER_OF_DAYS..=MAX_NUMBER_OF_DAYS).contains(&number_of_days),
        MeditationError::InvalidNumberOfDays
    );
    require!(
        (MIN_DAILY_FREQUENCY..=MAX_DAILY_FREQUENCY).contains(&daily_frequency),
        MeditationError::InvalidDailyFrequency
    );
    require!(
        (MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration_minutes),
        MeditationError::InvalidDurationMinutes
    );
    require!(
        commitment_stake >= ctx.accounts.meditation_program.min_stake
            && commitment_stake <= ctx.accounts.meditation_program.max_stake,
        MeditationError::InvalidCommitmentStakeAmount
    );

    // escrow the stake in the plan vault
    let cpi_accounts = Transfer {
        from: ctx.accounts.owner_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, commitment_stake)?;

    let start_at = Clock::get()?.unix_timestamp;
    let end_at = end_timestamp(start_at, number_of_days);

    let plan = &mut ctx.accounts.meditation_plan;
    plan.owner = ctx.accounts.owner.key();
    plan.id = id;
    plan.bump = ctx.bumps.meditation_plan;
    plan.number_of_days = number_of_days;
    plan.daily_frequency = daily_frequency;
    plan.duration_minutes = duration_minutes;
    plan.commitment_stake = commitment_stake;
    plan.start_at = start_at;
    plan.end_at = end_at;
    plan.is_active = true;
    plan.is_completed = false;
    plan.attestations = vec![];
    plan.penalties = 0;
    plan.rewards = 0;

    let program = &mut ctx.accounts.meditation_program;
    program.total_plans = program
        .total_plans
        .checked_add(1)
        .ok_or(MeditationError::MathOverflow)?;
    program.total_staked = program
        .total_staked
        .checked_add(commitment_stake)
        .ok_or(MeditationError::MathOverflow)?;

    emit!(PlanCreated {
        plan: ctx.accounts.meditation_plan.key(),
        owner: ctx.accounts.owner.key(),
        id,
        commitment_stake,
        start_at,
        end_at,
    });

    Ok(())
}
