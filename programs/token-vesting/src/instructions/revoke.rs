use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{ScheduleSet, VestingState};
use crate::utils::time;

pub fn revoke(ctx: Context<Revoke>, schedule_id: [u8; 32]) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        VestingError::UnauthorizedAdmin
    );

    let now = time::current_time(st)?;
    let entry = ctx.accounts.schedules.find_mut(&schedule_id)?;
    let frozen_releasable = entry.mark_revoked(now)?;
    let beneficiary = entry.beneficiary;

    emit!(ScheduleRevoked {
        schedule_id,
        beneficiary,
        frozen_releasable,
        revoked_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Revoke<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"schedules", vesting_state.key().as_ref()],
        bump
    )]
    pub schedules: Box<Account<'info, ScheduleSet>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ScheduleRevoked {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
    /// Amount releasable at revocation time, reachable again only after
    /// `release_revoked`.
    pub frozen_releasable: u64,
    pub revoked_at: i64,
}
