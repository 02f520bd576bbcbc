//! Program-wide constants.

/// Max vesting schedules stored in the schedule set PDA.
pub const MAX_SCHEDULES: usize = 64;

/// Max schedule definitions accepted per `start_vesting` call.
pub const MAX_BATCH_CREATE: usize = 16;

/// Denominator for TGE percentages (hundredths of a percent, 100 = 1%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Denominator for the per-token settlement price stored on a schedule.
pub const PRICE_DENOMINATOR: u64 = 10_000;
