use anchor_lang::prelude::*;

/// Event emitted when a meditation plan is created and its stake escrowed
/// Fields:
/// - plan: The address of the new plan account
/// - owner: The participant who created the plan
/// - id: The caller-chosen plan discriminator
/// - commitment_stake: The amount moved into the plan vault
/// - start_at / end_at: The commitment window
#[event]
pub struct PlanCreated {
    pub plan: Pubkey,
    pub owner: Pubkey,
    pub id: u64,
    pub commitment_stake: u64,
    pub start_at: i64,
    pub end_at: i64,
}

/// Event emitted when a session attestation is appended to a plan
/// Fields:
/// - plan: The plan the attestation was recorded against
/// - attester: The signer who attested (always the plan owner)
/// - started_at / ended_at: The attested session window
/// - total_attestations: Log length after the append
#[event]
pub struct AttestationRecorded {
    pub plan: Pubkey,
    pub attester: Pubkey,
    pub started_at: i64,
    pub ended_at: i64,
    pub total_attestations: u64,
}

/// Event emitted when a plan is settled and escrow released
/// Fields:
/// - plan: The settled plan account
/// - owner: The participant receiving the payout
/// - stake_returned: Principal returned from the vault
/// - penalties: Forfeited principal moved to the treasury
/// - rewards: Bonus paid from the treasury pool
#[event]
pub struct PlanSettled {
    pub plan: Pubkey,
    pub owner: Pubkey,
    pub stake_returned: u64,
    pub penalties: u64,
    pub rewards: u64,
}
