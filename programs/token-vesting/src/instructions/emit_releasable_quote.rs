use anchor_lang::prelude::*;

use crate::state::{ScheduleSet, VestingState};
use crate::utils::{accrual, time};

/// Read-only releasable quote surfaced as an event, for off-chain display.
pub fn emit_releasable_quote(
    ctx: Context<EmitReleasableQuote>,
    schedule_id: [u8; 32],
) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    let now = time::current_time(st)?;

    let entry = ctx.accounts.schedules.find(&schedule_id)?;
    let vested = accrual::vested_amount(entry, now)?;
    let releasable = entry.releasable_amount(now)?;

    emit!(ReleasableQuote {
        schedule_id,
        beneficiary: entry.beneficiary,
        vested,
        released: entry.released,
        releasable,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitReleasableQuote<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        seeds = [b"schedules", vesting_state.key().as_ref()],
        bump
    )]
    pub schedules: Box<Account<'info, ScheduleSet>>,
}

#[event]
pub struct ReleasableQuote {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
    pub vested: u64,
    pub released: u64,
    pub releasable: u64,
    pub timestamp: i64,
}
