use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{ScheduleSet, VestingState};

pub fn release_revoked(ctx: Context<ReleaseRevoked>, schedule_id: [u8; 32]) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        VestingError::UnauthorizedAdmin
    );

    let entry = ctx.accounts.schedules.find_mut(&schedule_id)?;
    entry.unlock_revoked()?;
    let beneficiary = entry.beneficiary;

    emit!(RevokedScheduleUnlocked {
        schedule_id,
        beneficiary,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReleaseRevoked<'info> {
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
pub struct RevokedScheduleUnlocked {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
}
