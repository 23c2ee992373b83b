use anchor_lang::prelude::*;

/// A single attested meditation session, appended to the owning plan's log.
/// Never mutated or removed once recorded.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, InitSpace)]
pub struct MeditationAttestation {
    pub attester: Pubkey,
    pub started_at: i64,
    pub ended_at: i64,
}
