use anchor_lang::prelude::*;

#[error_code]
pub enum MeditationError {
    #[msg("Number of days must be between 7 and 30")]
    InvalidNumberOfDays,
    #[msg("Daily frequency must be between 1 and 4")]
    InvalidDailyFrequency,
    #[msg("Duration minutes must be between 5 and 60")]
    InvalidDurationMinutes,
    #[msg("Commitment stake is outside the configured bounds")]
    InvalidCommitmentStakeAmount,
    #[msg("Only the configured stake mint is allowed")]
    InvalidMint,
    #[msg("Policy rates must be expressed in basis points (0-10000)")]
    InvalidPolicy,
    #[msg("Signer is not the plan owner")]
    UnauthorizedAccess,
    #[msg("Plan is no longer active")]
    PlanInactive,
    #[msg("Plan has already been settled")]
    PlanCompleted,
    #[msg("Attestation falls outside the plan period")]
    PlanExpired,
    #[msg("Plan period has not ended yet")]
    PlanNotEnded,
    #[msg("Session is shorter than the committed duration")]
    AttestationTooShort,
    #[msg("Session duration exceeds the 8 hour maximum")]
    AttestationTooLong,
    #[msg("Session must end before the current time")]
    AttestationInFuture,
    #[msg("All sessions for this day are already attested")]
    DailyFrequencyExceeded,
    #[msg("Attestation log is at capacity")]
    AttestationLogFull,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Divide by zero")]
    DivideByZero,
}
