//! Clock seam. Accrual math never reads time on its own; instructions fetch
//! `now` here and pass it down, so the whole accrual path is a pure function
//! of (schedule, now).

use anchor_lang::prelude::*;

use crate::state::VestingState;

/// Current time in Unix seconds: the admin-set override when present,
/// otherwise the ledger clock.
pub fn current_time(state: &VestingState) -> Result<i64> {
    if state.time_override != 0 {
        return Ok(state.time_override);
    }
    Ok(Clock::get()?.unix_timestamp)
}
