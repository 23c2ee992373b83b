use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::MeditationError;
use crate::events::AttestationRecorded;
use crate::state::*;

#[derive(Accounts)]
pub struct Attest<'info> {
    #[account(
        mut,
        seeds = [
            PLAN_SEED,
            meditation_plan.owner.as_ref(),
            &meditation_plan.id.to_le_bytes()
        ],
        bump = meditation_plan.bump,
        constraint = meditation_plan.owner == attester.key() @ MeditationError::UnauthorizedAccess
    )]
    pub meditation_plan: Account<'info, MeditationPlan>,

    #[account(mut)]
    pub attester: Signer<'info>,
}

pub fn attest(ctx: Context<Attest>, started_at: i64, ended_at: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let plan = &mut ctx.accounts.meditation_plan;
    plan.record_attestation(ctx.accounts.attester.key(), started_at, ended_at, now)?;

    emit!(AttestationRecorded {
        plan: ctx.accounts.meditation_plan.key(),
        attester: ctx.accounts.attester.key(),
        started_at,
        ended_at,
        total_attestations: ctx.accounts.meditation_plan.attestations.len() as u64,
    });

    Ok(())
}
