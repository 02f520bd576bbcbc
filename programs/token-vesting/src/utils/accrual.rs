//! Vesting accrual math. Pure functions of (schedule parameters, now);
//! integer floor division throughout, u128 intermediates.
//!
//! Phases:
//! - before `start + cliff` (including before `start`): only the TGE portion
//!   is vested;
//! - from `start + cliff` to `start + duration`: TGE portion plus a linear
//!   share of the remainder, measured from `start` over the full `duration`
//!   and quantized down to whole slice periods;
//! - at or after `start + duration`: the full allocation, independent of
//!   slice quantization.

use crate::constants::{BPS_DENOMINATOR, PRICE_DENOMINATOR};
use crate::error::VestingError;
use crate::state::VestingSchedule;

/// TGE portion of an allocation: `amount_total * tge_bps / 10000`.
pub fn tge_amount(amount_total: u64, tge_bps: u16) -> Result<u64, VestingError> {
    let v = (amount_total as u128)
        .checked_mul(tge_bps as u128)
        .ok_or(VestingError::MathOverflow)?
        / (BPS_DENOMINATOR as u128);
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

/// Settlement due on a claim of `releasable` tokens at `price` (payment base
/// units per 10^4 token base units): `releasable * price / 10000`, floored.
pub fn settlement_due(releasable: u64, price: u64) -> Result<u64, VestingError> {
    let due = (releasable as u128)
        .checked_mul(price as u128)
        .ok_or(VestingError::MathOverflow)?
        / (PRICE_DENOMINATOR as u128);
    u64::try_from(due).map_err(|_| VestingError::MathOverflow)
}

/// Total vested amount of `s` at `now`, ignoring releases and revocation.
/// Monotonically non-decreasing in `now`, bounded by `s.amount_total`.
pub fn vested_amount(s: &VestingSchedule, now: i64) -> Result<u64, VestingError> {
    if s.duration == 0 || s.slice_period_seconds == 0 {
        return Err(VestingError::InvalidConfig);
    }
    let tge = tge_amount(s.amount_total, s.tge_bps)?;

    let cliff = i64::try_from(s.cliff).map_err(|_| VestingError::MathOverflow)?;
    let cliff_end = s
        .start
        .checked_add(cliff)
        .ok_or(VestingError::MathOverflow)?;
    if now < cliff_end {
        return Ok(tge);
    }

    let duration = i64::try_from(s.duration).map_err(|_| VestingError::MathOverflow)?;
    let end = s
        .start
        .checked_add(duration)
        .ok_or(VestingError::MathOverflow)?;
    if now >= end {
        return Ok(s.amount_total);
    }

    // Linear phase: now >= cliff_end >= start here, so the elapsed time is
    // non-negative. Progress advances only at slice boundaries.
    let elapsed = (now - s.start) as u64;
    let sliced = elapsed / s.slice_period_seconds * s.slice_period_seconds;
    let linear_pool = s
        .amount_total
        .checked_sub(tge)
        .ok_or(VestingError::MathOverflow)?;
    let linear = (linear_pool as u128)
        .checked_mul(sliced as u128)
        .ok_or(VestingError::MathOverflow)?
        / (s.duration as u128);
    let vested = (tge as u128)
        .checked_add(linear)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ScheduleStatus;
    use anchor_lang::prelude::Pubkey;

    const MONTH: i64 = 30 * 24 * 3600;
    const DAY: u64 = 24 * 3600;
    const START: i64 = 1_622_551_248;

    fn schedule(cliff_months: i64, duration_months: i64, amount_total: u64, tge_bps: u16) -> VestingSchedule {
        VestingSchedule {
            id: [0u8; 32],
            beneficiary: Pubkey::new_unique(),
            index: 0,
            start: START,
            cliff: (cliff_months * MONTH) as u64,
            duration: (duration_months * MONTH) as u64,
            slice_period_seconds: DAY,
            revocable: true,
            amount_total,
            tge_bps,
            price: 0,
            released: 0,
            status: ScheduleStatus::Active,
            revoked_at: 0,
        }
    }

    #[test]
    fn tge_portion_is_floor_of_bps_share() {
        assert_eq!(tge_amount(200_000_000, 300).unwrap(), 6_000_000);
        assert_eq!(tge_amount(350_000_000, 450).unwrap(), 15_750_000);
        assert_eq!(tge_amount(500_000_000, 600).unwrap(), 30_000_000);
        assert_eq!(tge_amount(25_000_000, 1_800).unwrap(), 4_500_000);
        assert_eq!(tge_amount(500_000_000, 0).unwrap(), 0);
        assert_eq!(tge_amount(3, 9_999).unwrap(), 2);
    }

    // Seed round: 6mo cliff, 22mo duration, 200M tokens, 3% TGE.
    #[test]
    fn seed_round_reference_values() {
        let s = schedule(6, 22, 200_000_000, 300);
        assert_eq!(vested_amount(&s, START).unwrap(), 6_000_000);
        assert_eq!(vested_amount(&s, START + 6 * MONTH - 1).unwrap(), 6_000_000);
        assert_eq!(vested_amount(&s, START + 11 * MONTH).unwrap(), 103_000_000);
        assert_eq!(vested_amount(&s, START + 22 * MONTH + 1).unwrap(), 200_000_000);
    }

    // Strategic round: 4mo cliff, 18mo duration, 350M tokens, 4.5% TGE.
    #[test]
    fn strategic_round_reference_values() {
        let s = schedule(4, 18, 350_000_000, 450);
        assert_eq!(vested_amount(&s, START).unwrap(), 15_750_000);
        assert_eq!(vested_amount(&s, START + 4 * MONTH - 1).unwrap(), 15_750_000);
        assert_eq!(vested_amount(&s, START + 9 * MONTH).unwrap(), 182_875_000);
        assert_eq!(vested_amount(&s, START + 18 * MONTH + 1).unwrap(), 350_000_000);
    }

    // Private round: 2mo cliff, 14mo duration, 500M tokens, 6% TGE.
    #[test]
    fn private_round_reference_values() {
        let s = schedule(2, 14, 500_000_000, 600);
        assert_eq!(vested_amount(&s, START + 2 * MONTH - 1).unwrap(), 30_000_000);
        assert_eq!(vested_amount(&s, START + 7 * MONTH).unwrap(), 265_000_000);
        assert_eq!(vested_amount(&s, START + 14 * MONTH + 1).unwrap(), 500_000_000);
    }

    // Public sale: no cliff, 8mo duration, 25M tokens, 18% TGE.
    #[test]
    fn zero_cliff_vests_tge_at_start() {
        let s = schedule(0, 8, 25_000_000, 1_800);
        assert_eq!(vested_amount(&s, START - 1).unwrap(), 4_500_000);
        assert_eq!(vested_amount(&s, START).unwrap(), 4_500_000);
        assert_eq!(vested_amount(&s, START + 4 * MONTH).unwrap(), 14_750_000);
    }

    // Advisory: 8mo cliff, 18mo duration, 500M tokens, no TGE.
    #[test]
    fn zero_tge_vests_nothing_before_cliff() {
        let s = schedule(8, 18, 500_000_000, 0);
        assert_eq!(vested_amount(&s, START).unwrap(), 0);
        assert_eq!(vested_amount(&s, START + 8 * MONTH - 1).unwrap(), 0);
        assert_eq!(vested_amount(&s, START + 9 * MONTH).unwrap(), 250_000_000);
    }

    // Ecosystem: 1mo cliff, 35mo duration, 1.75B tokens, no TGE.
    #[test]
    fn large_allocation_half_way() {
        let s = schedule(1, 35, 1_750_000_000, 0);
        let half = START + 17 * MONTH + MONTH / 2;
        assert_eq!(vested_amount(&s, half).unwrap(), 875_000_000);
    }

    #[test]
    fn accrual_only_advances_at_slice_boundaries() {
        let s = schedule(6, 22, 200_000_000, 300);
        let half = START + 11 * MONTH;
        // Flat within a slice.
        assert_eq!(vested_amount(&s, half + 1).unwrap(), 103_000_000);
        assert_eq!(
            vested_amount(&s, half + DAY as i64 - 1).unwrap(),
            103_000_000
        );
        // One whole day later: 331 of 660 vesting days elapsed.
        let next = vested_amount(&s, half + DAY as i64).unwrap();
        assert_eq!(next, 6_000_000 + 194_000_000u64 * 331 / 660);
        assert!(next > 103_000_000);
    }

    #[test]
    fn vested_is_monotone_and_bounded() {
        let s = schedule(6, 22, 200_000_000, 300);
        let mut prev = 0u64;
        for k in 0..48 {
            let now = START - MONTH + k * MONTH / 2;
            let v = vested_amount(&s, now).unwrap();
            assert!(v >= prev);
            assert!(v <= s.amount_total);
            prev = v;
        }
        assert_eq!(prev, s.amount_total);
    }

    // Per-round settlement totals from the reference claim flows.
    #[test]
    fn settlement_due_matches_reference_payments() {
        assert_eq!(settlement_due(50_000_000, 60).unwrap(), 300_000);
        assert_eq!(settlement_due(150_000_000, 90).unwrap(), 1_350_000);
        assert_eq!(settlement_due(150_000_000, 120).unwrap(), 1_800_000);
        assert_eq!(settlement_due(20_000_000, 160).unwrap(), 320_000);
        // Free rounds settle nothing.
        assert_eq!(settlement_due(200_000_000, 0).unwrap(), 0);
        // Floored, never rounded up.
        assert_eq!(settlement_due(3, 9_999).unwrap(), 2);
        assert_eq!(settlement_due(0, 60).unwrap(), 0);
    }

    #[test]
    fn oversized_durations_error_instead_of_wrapping() {
        let mut s = schedule(0, 8, 200_000_000, 0);
        s.duration = i64::MAX as u64 + 1;
        s.cliff = 0;
        assert!(matches!(
            vested_amount(&s, s.start),
            Err(VestingError::MathOverflow)
        ));

        let mut s = schedule(0, 8, 200_000_000, 0);
        s.cliff = i64::MAX as u64 + 1;
        s.duration = u64::MAX;
        assert!(matches!(
            vested_amount(&s, s.start),
            Err(VestingError::MathOverflow)
        ));

        // In range but past the epoch ceiling: addition overflow, not wrap.
        let mut s = schedule(0, 8, 200_000_000, 0);
        s.start = i64::MAX - 10;
        s.cliff = 0;
        s.duration = 100;
        assert!(matches!(
            vested_amount(&s, s.start),
            Err(VestingError::MathOverflow)
        ));
    }

    #[test]
    fn degenerate_schedule_is_rejected() {
        let mut s = schedule(0, 8, 1_000, 0);
        s.duration = 0;
        assert!(matches!(
            vested_amount(&s, START),
            Err(VestingError::InvalidConfig)
        ));
        let mut s = schedule(0, 8, 1_000, 0);
        s.slice_period_seconds = 0;
        assert!(matches!(
            vested_amount(&s, START),
            Err(VestingError::InvalidConfig)
        ));
    }
}
