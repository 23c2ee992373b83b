use anchor_lang::prelude::*;

use crate::constants::{MAX_ATTESTATIONS, MAX_SESSION_SECONDS, MINUTE_IN_SECONDS};
use crate::error::MeditationError;
use crate::state::{MeditationAttestation, Settlement, SettlementPolicy};
use crate::utils::day_index;

/// A participant's habit-commitment record and settlement tally.
///
/// Lives at the PDA derived from (b"meditation_plan", owner, id); the
/// derivation inputs are stored on the account so the address is always
/// recomputable.
#[account]
#[derive(InitSpace)]
pub struct MeditationPlan {
    pub owner: Pubkey,
    pub id: u64,
    pub bump: u8,
    pub number_of_days: u8,
    pub daily_frequency: u8,
    pub duration_minutes: u8,
    pub commitment_stake: u64,
    pub start_at: i64,
    pub end_at: i64,
    pub is_active: bool,
    pub is_completed: bool,
    #[max_len(120)] // 4 times a day * max of 30 days
    pub attestations: Vec<MeditationAttestation>,
    pub penalties: u64,
    pub rewards: u64,
}

impl MeditationPlan {
    pub fn expected_attestations(&self) -> u64 {
        self.number_of_days as u64 * self.daily_frequency as u64
    }

    /// Attestations already recorded in the same day period as `timestamp`.
    pub fn attestations_on_day(&self, timestamp: i64) -> u64 {
        let day = day_index(self.start_at, timestamp);
        self.attestations
            .iter()
            .filter(|attestation| day_index(self.start_at, attestation.started_at) == day)
            .count() as u64
    }

    /// Appends a session proof after validating it against the plan's
    /// schedule. `now` is the chain clock at instruction start; sessions are
    /// attested after the fact.
    pub fn record_attestation(
        &mut self,
        attester: Pubkey,
        started_at: i64,
        ended_at: i64,
        now: i64,
    ) -> Result<()> {
        require!(self.is_active, MeditationError::PlanInactive);
        require!(!self.is_completed, MeditationError::PlanCompleted);
        require!(
            started_at >= self.start_at && started_at < self.end_at,
            MeditationError::PlanExpired
        );
        require!(ended_at <= now, MeditationError::AttestationInFuture);

        let duration = ended_at.saturating_sub(started_at);
        require!(
            duration >= self.duration_minutes as i64 * MINUTE_IN_SECONDS,
            MeditationError::AttestationTooShort
        );
        require!(
            duration <= MAX_SESSION_SECONDS,
            MeditationError::AttestationTooLong
        );
        require!(
            self.attestations_on_day(started_at) < self.daily_frequency as u64,
            MeditationError::DailyFrequencyExceeded
        );
        require!(
            self.attestations.len() < MAX_ATTESTATIONS,
            MeditationError::AttestationLogFull
        );

        self.attestations.push(MeditationAttestation {
            attester,
            started_at,
            ended_at,
        });

        Ok(())
    }

    /// Finalizes the plan: fixes penalties and rewards and flips the record
    /// into its terminal state. Settlement is due once the period has
    /// elapsed, or early when every expected session is already attested.
    /// Rewards are clamped to what the treasury currently holds.
    pub fn finalize(
        &mut self,
        policy: &SettlementPolicy,
        treasury_balance: u64,
        now: i64,
    ) -> Result<Settlement> {
        require!(self.is_active, MeditationError::PlanInactive);
        require!(!self.is_completed, MeditationError::PlanCompleted);

        let expected = self.expected_attestations();
        let actual = self.attestations.len() as u64;
        require!(
            now >= self.end_at || actual == expected,
            MeditationError::PlanNotEnded
        );

        let mut settlement = policy.settle(self.commitment_stake, expected, actual)?;
        settlement.rewards = settlement.rewards.min(treasury_balance);

        self.is_active = false;
        self.is_completed = true;
        self.penalties = settlement.penalties;
        self.rewards = settlement.rewards;

        Ok(settlement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        DAY_IN_SECONDS, DEFAULT_PENALTY_RATE_BPS, DEFAULT_REWARD_RATE_BPS,
        DEFAULT_SUCCESS_THRESHOLD_BPS, HOUR_IN_SECONDS,
    };
    use crate::utils::end_timestamp;

    const START_AT: i64 = 1_700_000_000;
    const STAKE: u64 = 50_000_000;

    fn test_plan(number_of_days: u8, daily_frequency: u8, duration_minutes: u8) -> MeditationPlan {
        MeditationPlan {
            owner: Pubkey::new_unique(),
            id: 1,
            bump: 254,
            number_of_days,
            daily_frequency,
            duration_minutes,
            commitment_stake: STAKE,
            start_at: START_AT,
            end_at: end_timestamp(START_AT, number_of_days),
            is_active: true,
            is_completed: false,
            attestations: vec![],
            penalties: 0,
            rewards: 0,
        }
    }

    fn default_policy() -> SettlementPolicy {
        SettlementPolicy {
            success_threshold_bps: DEFAULT_SUCCESS_THRESHOLD_BPS,
            reward_rate_bps: DEFAULT_REWARD_RATE_BPS,
            penalty_rate_bps: DEFAULT_PENALTY_RATE_BPS,
        }
    }

    /// Attests one valid session per day for every day of the plan.
    fn attest_all_days(plan: &mut MeditationPlan) {
        for day in 0..plan.number_of_days as i64 {
            let started_at = START_AT + day * DAY_IN_SECONDS;
            let ended_at = started_at + plan.duration_minutes as i64 * 60;
            plan.record_attestation(plan.owner, started_at, ended_at, ended_at + 1)
                .expect("attestation should succeed");
        }
    }

    #[test]
    fn test_plan_window_is_exactly_number_of_days() {
        let plan = test_plan(30, 2, 20);
        assert_eq!(plan.end_at - plan.start_at, 2_592_000);
        assert_eq!(plan.expected_attestations(), 60);
    }

    #[test]
    fn test_record_attestation_appends_in_order() {
        let mut plan = test_plan(7, 2, 20);
        let owner = plan.owner;

        let first_end = START_AT + 20 * 60;
        plan.record_attestation(owner, START_AT, first_end, first_end + 1)
            .unwrap();

        let second_start = START_AT + 2 * HOUR_IN_SECONDS;
        let second_end = second_start + 25 * 60;
        plan.record_attestation(owner, second_start, second_end, second_end + 1)
            .unwrap();

        assert_eq!(plan.attestations.len(), 2);
        assert_eq!(plan.attestations[0].attester, owner);
        assert_eq!(plan.attestations[0].started_at, START_AT);
        assert_eq!(plan.attestations[0].ended_at, first_end);
        assert_eq!(plan.attestations[1].started_at, second_start);
        assert!(plan.is_active);
        assert!(!plan.is_completed);
    }

    #[test]
    fn test_attest_inactive_plan_fails() {
        let mut plan = test_plan(7, 1, 20);
        plan.is_active = false;
        let result = plan.record_attestation(plan.owner, START_AT, START_AT + 1_200, START_AT + 1_201);
        assert_eq!(result.unwrap_err(), MeditationError::PlanInactive.into());
    }

    #[test]
    fn test_attest_completed_plan_fails() {
        let mut plan = test_plan(7, 1, 20);
        plan.is_completed = true;
        let result = plan.record_attestation(plan.owner, START_AT, START_AT + 1_200, START_AT + 1_201);
        assert_eq!(result.unwrap_err(), MeditationError::PlanCompleted.into());
    }

    #[test]
    fn test_attest_after_plan_end_fails() {
        let mut plan = test_plan(7, 1, 20);
        let started_at = plan.end_at + 1;
        let ended_at = started_at + 1_200;
        let result = plan.record_attestation(plan.owner, started_at, ended_at, ended_at + 1);
        assert_eq!(result.unwrap_err(), MeditationError::PlanExpired.into());
    }

    #[test]
    fn test_attest_at_end_boundary_fails() {
        // the window is half-open: end_at itself is outside
        let mut plan = test_plan(7, 1, 20);
        let started_at = plan.end_at;
        let ended_at = started_at + 1_200;
        let result = plan.record_attestation(plan.owner, started_at, ended_at, ended_at + 1);
        assert_eq!(result.unwrap_err(), MeditationError::PlanExpired.into());
    }

    #[test]
    fn test_attest_before_plan_start_fails() {
        let mut plan = test_plan(7, 1, 20);
        let started_at = START_AT - DAY_IN_SECONDS;
        let ended_at = started_at + 1_200;
        let result = plan.record_attestation(plan.owner, started_at, ended_at, ended_at + 1);
        assert_eq!(result.unwrap_err(), MeditationError::PlanExpired.into());
    }

    #[test]
    fn test_attest_session_too_short_fails() {
        let mut plan = test_plan(7, 1, 20);
        // 19 minutes against a 20 minute commitment
        let ended_at = START_AT + 19 * 60;
        let result = plan.record_attestation(plan.owner, START_AT, ended_at, ended_at + 1);
        assert_eq!(
            result.unwrap_err(),
            MeditationError::AttestationTooShort.into()
        );
    }

    #[test]
    fn test_attest_session_too_long_fails() {
        let mut plan = test_plan(7, 1, 20);
        let ended_at = START_AT + 8 * HOUR_IN_SECONDS + 1;
        let result = plan.record_attestation(plan.owner, START_AT, ended_at, ended_at + 1);
        assert_eq!(
            result.unwrap_err(),
            MeditationError::AttestationTooLong.into()
        );
    }

    #[test]
    fn test_attest_future_session_fails() {
        let mut plan = test_plan(7, 1, 20);
        let ended_at = START_AT + 1_200;
        // clock still sits before the session end
        let result = plan.record_attestation(plan.owner, START_AT, ended_at, ended_at - 1);
        assert_eq!(
            result.unwrap_err(),
            MeditationError::AttestationInFuture.into()
        );
    }

    #[test]
    fn test_daily_quota_enforced() {
        let mut plan = test_plan(7, 2, 20);
        let owner = plan.owner;

        for offset in [0, 2 * HOUR_IN_SECONDS] {
            let started_at = START_AT + offset;
            let ended_at = started_at + 1_200;
            plan.record_attestation(owner, started_at, ended_at, ended_at + 1)
                .unwrap();
        }

        // third session on the same day exceeds daily_frequency = 2
        let started_at = START_AT + 5 * HOUR_IN_SECONDS;
        let ended_at = started_at + 1_200;
        let result = plan.record_attestation(owner, started_at, ended_at, ended_at + 1);
        assert_eq!(
            result.unwrap_err(),
            MeditationError::DailyFrequencyExceeded.into()
        );
        assert_eq!(plan.attestations_on_day(START_AT), 2);
    }

    #[test]
    fn test_quota_resets_on_next_day() {
        let mut plan = test_plan(7, 1, 20);
        let owner = plan.owner;

        let ended_at = START_AT + 1_200;
        plan.record_attestation(owner, START_AT, ended_at, ended_at + 1)
            .unwrap();

        let next_day = START_AT + DAY_IN_SECONDS;
        let ended_at = next_day + 1_200;
        plan.record_attestation(owner, next_day, ended_at, ended_at + 1)
            .unwrap();

        assert_eq!(plan.attestations.len(), 2);
    }

    #[test]
    fn test_finalize_before_end_fails_when_sessions_remain() {
        let mut plan = test_plan(7, 1, 20);
        let result = plan.finalize(&default_policy(), 0, plan.end_at - 1);
        assert_eq!(result.unwrap_err(), MeditationError::PlanNotEnded.into());
        assert!(plan.is_active);
        assert!(!plan.is_completed);
    }

    #[test]
    fn test_finalize_early_when_all_sessions_attested() {
        let mut plan = test_plan(7, 1, 20);
        attest_all_days(&mut plan);

        // still a day before end_at, but the quota is fully met
        let now = plan.end_at - DAY_IN_SECONDS / 2;
        let settlement = plan.finalize(&default_policy(), u64::MAX, now).unwrap();

        assert_eq!(settlement.stake_returned, STAKE);
        assert_eq!(settlement.penalties, 0);
        assert_eq!(settlement.rewards, STAKE / 10);
        assert!(!plan.is_active);
        assert!(plan.is_completed);
        assert_eq!(plan.rewards, STAKE / 10);
        assert_eq!(plan.penalties, 0);
    }

    #[test]
    fn test_finalize_with_no_attestations_forfeits_stake() {
        let mut plan = test_plan(7, 1, 20);
        let settlement = plan.finalize(&default_policy(), 0, plan.end_at).unwrap();

        assert!(plan.is_completed);
        assert!(!plan.is_active);
        assert!(settlement.penalties > 0);
        assert_eq!(settlement.rewards, 0);
        assert_eq!(settlement.stake_returned, STAKE - settlement.penalties);
        assert_eq!(plan.penalties, STAKE);
    }

    #[test]
    fn test_finalize_partial_completion_splits_stake() {
        let mut plan = test_plan(7, 1, 20);
        let owner = plan.owner;
        for day in 0..2 {
            let started_at = START_AT + day * DAY_IN_SECONDS;
            let ended_at = started_at + 1_200;
            plan.record_attestation(owner, started_at, ended_at, ended_at + 1)
                .unwrap();
        }

        let settlement = plan.finalize(&default_policy(), 0, plan.end_at + 1).unwrap();
        assert_eq!(settlement.penalties, STAKE * 5 / 7);
        assert_eq!(settlement.stake_returned + settlement.penalties, STAKE);
        assert_eq!(settlement.rewards, 0);
    }

    #[test]
    fn test_finalize_rewards_clamped_to_treasury() {
        let mut plan = test_plan(7, 1, 20);
        attest_all_days(&mut plan);

        // treasury holds less than the computed bonus
        let settlement = plan.finalize(&default_policy(), 1_234, plan.end_at).unwrap();
        assert_eq!(settlement.rewards, 1_234);
        assert_eq!(plan.rewards, 1_234);
        assert_eq!(settlement.stake_returned, STAKE);
    }

    #[test]
    fn test_finalize_twice_fails() {
        let mut plan = test_plan(7, 1, 20);
        plan.finalize(&default_policy(), 0, plan.end_at).unwrap();

        let penalties = plan.penalties;
        let result = plan.finalize(&default_policy(), 0, plan.end_at + 100);
        assert_eq!(result.unwrap_err(), MeditationError::PlanCompleted.into());
        // terminal state is immutable
        assert_eq!(plan.penalties, penalties);
        assert!(plan.is_completed);
    }

    #[test]
    fn test_no_attestation_after_finalize() {
        let mut plan = test_plan(7, 1, 20);
        plan.finalize(&default_policy(), 0, plan.end_at).unwrap();

        let started_at = plan.end_at - DAY_IN_SECONDS;
        let ended_at = started_at + 1_200;
        let result = plan.record_attestation(plan.owner, started_at, ended_at, ended_at + 1);
        assert_eq!(result.unwrap_err(), MeditationError::PlanInactive.into());
    }
}
