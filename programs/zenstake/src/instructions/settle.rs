use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::MeditationError;
use crate::events::PlanSettled;
use crate::state::*;

#[derive(Accounts)]
pub struct Settle<'info> {
    #[account(
        mut,
        seeds = [
            PLAN_SEED,
            meditation_plan.owner.as_ref(),
            &meditation_plan.id.to_le_bytes()
        ],
        bump = meditation_plan.bump,
        has_one = owner @ MeditationError::UnauthorizedAccess
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
        mut,
        seeds = [
            VAULT_SEED,
            meditation_plan.owner.as_ref(),
            &meditation_plan.id.to_le_bytes()
        ],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump,
        constraint = treasury.mint == meditation_program.token_mint @ MeditationError::InvalidMint
    )]
    pub treasury: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn settle(ctx: Context<Settle>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let policy = ctx.accounts.meditation_program.policy;
    let treasury_balance = ctx.accounts.treasury.amount;

    let plan = &mut ctx.accounts.meditation_plan;
    let settlement = plan.finalize(&policy, treasury_balance, now)?;

    let owner_key = plan.owner;
    let id_bytes = plan.id.to_le_bytes();
    let plan_bump = plan.bump;
    let commitment_stake = plan.commitment_stake;

    let plan_seeds = &[PLAN_SEED, owner_key.as_ref(), id_bytes.as_ref(), &[plan_bump]];
    let plan_signer = &[&plan_seeds[..]];

    // principal back to the owner, signed by the plan PDA
    if settlement.stake_returned > 0 {
        let cpi_accounts = Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.owner_token_account.to_account_info(),
            authority: ctx.accounts.meditation_plan.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            plan_signer,
        );
        token::transfer(cpi_ctx, settlement.stake_returned)?;
    }

    // forfeited stake feeds the shared treasury pool
    if settlement.penalties > 0 {
        let cpi_accounts = Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.treasury.to_account_info(),
            authority: ctx.accounts.meditation_plan.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            plan_signer,
        );
        token::transfer(cpi_ctx, settlement.penalties)?;
    }

    // rewards come out of the treasury, never out of escrowed principal
    if settlement.rewards > 0 {
        let program_seeds = &[PROGRAM_SEED, &[ctx.accounts.meditation_program.bump]];
        let program_signer = &[&program_seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.treasury.to_account_info(),
            to: ctx.accounts.owner_token_account.to_account_info(),
            authority: ctx.accounts.meditation_program.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            program_signer,
        );
        token::transfer(cpi_ctx, settlement.rewards)?;
    }

    let program = &mut ctx.accounts.meditation_program;
    program.total_staked = program
        .total_staked
        .checked_sub(commitment_stake)
        .ok_or(MeditationError::MathOverflow)?;

    emit!(PlanSettled {
        plan: ctx.accounts.meditation_plan.key(),
        owner: owner_key,
        stake_returned: settlement.stake_returned,
        penalties: settlement.penalties,
        rewards: settlement.rewards,
    });

    Ok(())
}
