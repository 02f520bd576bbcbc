use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_SCHEDULES;
use crate::error::VestingError;
use crate::utils::accrual;

/// Lifecycle of a schedule. A revoked schedule is locked until the admin
/// performs the explicit `release_revoked` unlock; afterwards ordinary
/// release semantics resume. Schedules are never deleted.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleStatus {
    Active,
    /// Revoked and locked: releasable is 0 and `release` is rejected.
    Revoked,
    /// Revoked, then unlocked via `release_revoked`.
    Unlocked,
}

/// One vesting schedule, keyed by a blake3 id over (beneficiary, index).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    pub id: [u8; 32],
    pub beneficiary: Pubkey,
    /// Index among this beneficiary's schedules, assigned at creation.
    pub index: u64,
    /// Vesting start (Unix seconds, UTC).
    pub start: i64,
    /// Cliff length in seconds after `start`.
    pub cliff: u64,
    /// Total linear vesting duration in seconds after `start`.
    pub duration: u64,
    /// Granularity of linear accrual; progress only advances at whole slices.
    pub slice_period_seconds: u64,
    pub revocable: bool,
    /// Total token units allocated to this schedule.
    pub amount_total: u64,
    /// TGE portion in hundredths of a percent (100 = 1%).
    pub tge_bps: u16,
    /// Settlement price per token, scaled by PRICE_DENOMINATOR. Payment-leg
    /// input only; never enters accrual math.
    pub price: u64,
    /// Cumulative released amount.
    pub released: u64,
    pub status: ScheduleStatus,
    /// Timestamp of revocation, 0 if never revoked.
    pub revoked_at: i64,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // id
        32 + // beneficiary
        8 +  // index
        8 +  // start
        8 +  // cliff
        8 +  // duration
        8 +  // slice_period_seconds
        1 +  // revocable
        8 +  // amount_total
        2 +  // tge_bps
        8 +  // price
        8 +  // released
        1 +  // status
        8;   // revoked_at

    /// Releasable amount at `now`: vested minus already released, 0 while
    /// the schedule sits in the revoked-locked state.
    pub fn releasable_amount(&self, now: i64) -> Result<u64, VestingError> {
        if self.status == ScheduleStatus::Revoked {
            return Ok(0);
        }
        let vested = accrual::vested_amount(self, now)?;
        vested
            .checked_sub(self.released)
            .ok_or(VestingError::MathOverflow)
    }

    /// Record a release of `amount` at `now`. Rejects over-release rather
    /// than clamping; releasing 0 is a no-op.
    pub fn apply_release(&mut self, amount: u64, now: i64) -> Result<(), VestingError> {
        if self.status == ScheduleStatus::Revoked {
            return Err(VestingError::Revoked);
        }
        if amount > self.releasable_amount(now)? {
            return Err(VestingError::ExceedsReleasable);
        }
        self.released = self
            .released
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    /// Revoke the schedule, freezing whatever was releasable at `now` behind
    /// the `release_revoked` unlock. Returns the frozen releasable amount.
    pub fn mark_revoked(&mut self, now: i64) -> Result<u64, VestingError> {
        if !self.revocable {
            return Err(VestingError::NotRevocable);
        }
        if self.status != ScheduleStatus::Active {
            return Err(VestingError::Revoked);
        }
        let frozen = self.releasable_amount(now)?;
        self.status = ScheduleStatus::Revoked;
        self.revoked_at = now;
        Ok(frozen)
    }

    /// One-time unlock after `mark_revoked`; ordinary release semantics
    /// resume afterwards.
    pub fn unlock_revoked(&mut self) -> Result<(), VestingError> {
        if self.status != ScheduleStatus::Revoked {
            return Err(VestingError::NotRevoked);
        }
        self.status = ScheduleStatus::Unlocked;
        Ok(())
    }
}

/// PDA holding every vesting schedule.
#[account]
pub struct ScheduleSet {
    pub schedules: Vec<VestingSchedule>,
}

impl ScheduleSet {
    /// Space for discriminator + vec header + max entries.
    pub const fn space() -> usize {
        8 + 4 + MAX_SCHEDULES * VestingSchedule::SIZE
    }

    pub fn find(&self, id: &[u8; 32]) -> Result<&VestingSchedule, VestingError> {
        self.schedules
            .iter()
            .find(|s| &s.id == id)
            .ok_or(VestingError::ScheduleNotFound)
    }

    pub fn find_mut(&mut self, id: &[u8; 32]) -> Result<&mut VestingSchedule, VestingError> {
        self.schedules
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or(VestingError::ScheduleNotFound)
    }

    /// Number of schedules held by `beneficiary`; the next per-beneficiary
    /// index at creation time.
    pub fn count_for_beneficiary(&self, beneficiary: &Pubkey) -> u64 {
        self.schedules
            .iter()
            .filter(|s| &s.beneficiary == beneficiary)
            .count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONTH: i64 = 30 * 24 * 3600;
    const START: i64 = 1_622_551_248;

    /// Seed-round parameters from the reference deployment.
    fn seed_schedule() -> VestingSchedule {
        VestingSchedule {
            id: [7u8; 32],
            beneficiary: Pubkey::new_unique(),
            index: 0,
            start: START,
            cliff: (6 * MONTH) as u64,
            duration: (22 * MONTH) as u64,
            slice_period_seconds: 24 * 3600,
            revocable: true,
            amount_total: 200_000_000,
            tge_bps: 300,
            price: 60,
            released: 0,
            status: ScheduleStatus::Active,
            revoked_at: 0,
        }
    }

    #[test]
    fn release_reduces_releasable_exactly() {
        let mut s = seed_schedule();
        let half = START + 11 * MONTH;
        assert_eq!(s.releasable_amount(half).unwrap(), 103_000_000);
        s.apply_release(10_000, half).unwrap();
        assert_eq!(s.released, 10_000);
        assert_eq!(s.releasable_amount(half).unwrap(), 102_990_000);

        // Full remainder at the end, independent of what was released.
        let end = START + 22 * MONTH + 1;
        assert_eq!(s.releasable_amount(end).unwrap(), 199_990_000);
    }

    #[test]
    fn over_release_is_rejected_not_clamped() {
        let mut s = seed_schedule();
        let half = START + 11 * MONTH;
        assert!(matches!(
            s.apply_release(103_000_001, half),
            Err(VestingError::ExceedsReleasable)
        ));
        assert_eq!(s.released, 0);
        // Releasing 0 is a no-op.
        s.apply_release(0, half).unwrap();
        assert_eq!(s.released, 0);
    }

    #[test]
    fn repeated_partial_releases_sum_without_drift() {
        let mut s = seed_schedule();
        let end = START + 22 * MONTH + 1;
        s.apply_release(99_990_000, end).unwrap();
        s.apply_release(10_000, end).unwrap();
        assert_eq!(s.releasable_amount(end).unwrap(), 100_000_000);
        s.apply_release(100_000_000, end).unwrap();
        assert_eq!(s.released, s.amount_total);
        assert_eq!(s.releasable_amount(end).unwrap(), 0);
        assert!(matches!(
            s.apply_release(1, end),
            Err(VestingError::ExceedsReleasable)
        ));
    }

    #[test]
    fn revoke_locks_until_explicit_unlock() {
        let mut s = seed_schedule();
        let half = START + 11 * MONTH;
        let frozen = s.mark_revoked(half).unwrap();
        assert_eq!(frozen, 103_000_000);
        assert_eq!(s.revoked_at, half);

        // Locked: nothing releasable, release rejected even though the
        // frozen amount is positive.
        assert_eq!(s.releasable_amount(half).unwrap(), 0);
        assert_eq!(s.releasable_amount(half + 5 * MONTH).unwrap(), 0);
        assert!(matches!(
            s.apply_release(1_000_000, half),
            Err(VestingError::Revoked)
        ));

        // Unlock restores ordinary release semantics.
        s.unlock_revoked().unwrap();
        s.apply_release(10_000, half).unwrap();
        assert_eq!(s.releasable_amount(half).unwrap(), 102_990_000);
    }

    #[test]
    fn revoke_requires_revocable_and_active() {
        let mut s = seed_schedule();
        s.revocable = false;
        assert!(matches!(
            s.mark_revoked(START),
            Err(VestingError::NotRevocable)
        ));

        let mut s = seed_schedule();
        s.mark_revoked(START).unwrap();
        assert!(matches!(s.mark_revoked(START), Err(VestingError::Revoked)));
        s.unlock_revoked().unwrap();
        // Stays revoked after the unlock; cannot be revoked again.
        assert!(matches!(s.mark_revoked(START), Err(VestingError::Revoked)));
    }

    #[test]
    fn unlock_requires_locked_state() {
        let mut s = seed_schedule();
        assert!(matches!(s.unlock_revoked(), Err(VestingError::NotRevoked)));
    }

    #[test]
    fn schedule_set_lookup_and_indexing() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut first = seed_schedule();
        first.beneficiary = a;
        let mut second = seed_schedule();
        second.beneficiary = a;
        second.id = [9u8; 32];
        second.index = 1;

        let set = ScheduleSet {
            schedules: vec![first, second],
        };
        assert_eq!(set.count_for_beneficiary(&a), 2);
        assert_eq!(set.count_for_beneficiary(&b), 0);
        assert_eq!(set.find(&[9u8; 32]).unwrap().index, 1);
        assert!(matches!(
            set.find(&[1u8; 32]),
            Err(VestingError::ScheduleNotFound)
        ));
    }
}
