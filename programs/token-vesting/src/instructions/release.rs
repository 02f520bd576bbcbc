use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{ScheduleSet, ScheduleStatus, VestingState};
use crate::utils::time;

pub fn release(ctx: Context<Release>, schedule_id: [u8; 32], amount: u64) -> Result<()> {
    // Capture AccountInfos before taking borrows for the CPI below.
    let vesting_state_ai = ctx.accounts.vesting_state.to_account_info();
    let vesting_state_bump = ctx.bumps.vesting_state;

    let st = &ctx.accounts.vesting_state;
    let schedule = *ctx.accounts.schedules.find(&schedule_id)?;

    // Only the beneficiary or the pool owner may release; tokens always go
    // to the beneficiary.
    let caller = ctx.accounts.caller.key();
    require!(
        caller == schedule.beneficiary || caller == st.admin,
        VestingError::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        schedule.beneficiary,
        VestingError::InvalidTokenAccount
    );

    require!(
        schedule.status != ScheduleStatus::Revoked,
        VestingError::Revoked
    );

    let now = time::current_time(st)?;
    let releasable = schedule.releasable_amount(now)?;
    require!(amount <= releasable, VestingError::ExceedsReleasable);

    if amount == 0 {
        return Ok(());
    }

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::TransferFailed
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_state", &[vesting_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: vesting_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    // The transfer and these counter updates commit atomically with the
    // transaction; a failed CPI above unwinds the whole instruction.
    let entry = ctx.accounts.schedules.find_mut(&schedule_id)?;
    entry.apply_release(amount, now)?;
    let released_total = entry.released;

    let st = &mut ctx.accounts.vesting_state;
    st.total_unreleased = st
        .total_unreleased
        .checked_sub(amount)
        .ok_or(VestingError::MathOverflow)?;

    emit!(TokensReleased {
        schedule_id,
        beneficiary: schedule.beneficiary,
        caller,
        amount,
        released_total,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"schedules", vesting_state.key().as_ref()],
        bump
    )]
    pub schedules: Box<Account<'info, ScheduleSet>>,

    #[account(
        mut,
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump,
        constraint = vault.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
    pub caller: Pubkey,
    pub amount: u64,
    pub released_total: u64,
}
