use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingState;

/// Admin-set simulated clock for rehearsal deployments. Passing 0 clears
/// the override and returns the program to the ledger clock.
pub fn set_current_time(ctx: Context<SetCurrentTime>, timestamp: i64) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        VestingError::UnauthorizedAdmin
    );
    require!(timestamp >= 0, VestingError::InvalidTimestamp);

    st.time_override = timestamp;

    emit!(ClockOverrideSet {
        admin: st.admin,
        timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetCurrentTime<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ClockOverrideSet {
    pub admin: Pubkey,
    pub timestamp: i64,
}
