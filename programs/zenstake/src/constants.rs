// PDA SEEDS

/// Seed for the MeditationProgram config PDA
pub const PROGRAM_SEED: &[u8] = b"meditation_program";
/// Seed for MeditationPlan account PDAs, combined with (owner, id)
pub const PLAN_SEED: &[u8] = b"meditation_plan";
/// Seed for per-plan stake vault PDAs, combined with (owner, id)
pub const VAULT_SEED: &[u8] = b"vault";
/// Seed for the shared treasury PDA (reward pool / penalty sink)
pub const TREASURY_SEED: &[u8] = b"treasury";

// TIME

pub const MINUTE_IN_SECONDS: i64 = 60;
pub const HOUR_IN_SECONDS: i64 = 60 * 60;
pub const DAY_IN_SECONDS: i64 = 24 * 60 * 60;

/// A single attested session may not run longer than this
pub const MAX_SESSION_SECONDS: i64 = 8 * HOUR_IN_SECONDS;

// PLAN PARAMETER BOUNDS

pub const MIN_NUMBER_OF_DAYS: u8 = 7;
pub const MAX_NUMBER_OF_DAYS: u8 = 30;
pub const MIN_DAILY_FREQUENCY: u8 = 1;
pub const MAX_DAILY_FREQUENCY: u8 = 4;
pub const MIN_DURATION_MINUTES: u8 = 5;
pub const MAX_DURATION_MINUTES: u8 = 60;

/// Hard capacity of the attestation log: 4 times a day * max of 30 days
pub const MAX_ATTESTATIONS: usize = 120;

// SETTLEMENT POLICY

/// 10,000 basis points = 100% - Divisor for basis point calculations
pub const BASIS_POINTS_DIVISOR: u64 = 10_000;

/// Default completion rate required for a reward-qualifying settlement (90%)
pub const DEFAULT_SUCCESS_THRESHOLD_BPS: u16 = 9_000;
/// Default bonus credited on a qualifying settlement (10% of the stake)
pub const DEFAULT_REWARD_RATE_BPS: u16 = 1_000;
/// Default fraction of the missed share that is forfeited (100%)
pub const DEFAULT_PENALTY_RATE_BPS: u16 = 10_000;
