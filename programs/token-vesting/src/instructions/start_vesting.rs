use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{BPS_DENOMINATOR, MAX_BATCH_CREATE, MAX_SCHEDULES};
use crate::error::VestingError;
use crate::state::{ScheduleSet, ScheduleStatus, VestingSchedule, VestingState};
use crate::utils::schedule_id;

/// One schedule definition in a `start_vesting` batch.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleInput {
    pub beneficiary: Pubkey,
    pub start: i64,
    pub cliff: u64,
    pub duration: u64,
    pub slice_period_seconds: u64,
    pub revocable: bool,
    pub amount_total: u64,
    pub tge_bps: u16,
    pub price: u64,
}

pub fn start_vesting(ctx: Context<StartVesting>, inputs: Vec<ScheduleInput>) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        VestingError::UnauthorizedAdmin
    );
    require!(!inputs.is_empty(), VestingError::EmptyBatch);
    require!(inputs.len() <= MAX_BATCH_CREATE, VestingError::BatchTooLarge);

    let schedules = &mut ctx.accounts.schedules;
    require!(
        schedules.schedules.len() + inputs.len() <= MAX_SCHEDULES,
        VestingError::ScheduleSetFull
    );

    // Validate every entry and total the batch before touching state; the
    // batch commits all-or-nothing.
    let mut batch_total: u128 = 0;
    for input in inputs.iter() {
        require!(input.beneficiary != Pubkey::default(), VestingError::InvalidPubkey);
        require!(input.amount_total > 0, VestingError::InvalidAllocation);
        require!(input.start > 0, VestingError::InvalidTimestamp);
        require!(
            input.duration > 0 && input.duration <= i64::MAX as u64,
            VestingError::InvalidConfig
        );
        require!(input.cliff <= input.duration, VestingError::InvalidConfig);
        require!(
            input.slice_period_seconds >= 1 && input.slice_period_seconds <= input.duration,
            VestingError::InvalidConfig
        );
        require!(
            (input.tge_bps as u64) <= BPS_DENOMINATOR,
            VestingError::InvalidConfig
        );
        batch_total = batch_total
            .checked_add(input.amount_total as u128)
            .ok_or(VestingError::MathOverflow)?;
    }

    // Pool capacity: the vault must cover existing reservations plus the
    // whole batch.
    let reserved_after = (st.total_unreleased as u128)
        .checked_add(batch_total)
        .ok_or(VestingError::MathOverflow)?;
    require!(
        reserved_after <= ctx.accounts.vault.amount as u128,
        VestingError::InsufficientPool
    );

    for input in inputs.iter() {
        let index = schedules.count_for_beneficiary(&input.beneficiary);
        let id = schedule_id::derive(&input.beneficiary, index);
        schedules.schedules.push(VestingSchedule {
            id,
            beneficiary: input.beneficiary,
            index,
            start: input.start,
            cliff: input.cliff,
            duration: input.duration,
            slice_period_seconds: input.slice_period_seconds,
            revocable: input.revocable,
            amount_total: input.amount_total,
            tge_bps: input.tge_bps,
            price: input.price,
            released: 0,
            status: ScheduleStatus::Active,
            revoked_at: 0,
        });
        st.schedule_count = st
            .schedule_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        st.total_unreleased = st
            .total_unreleased
            .checked_add(input.amount_total)
            .ok_or(VestingError::MathOverflow)?;

        emit!(VestingStarted {
            schedule_id: id,
            beneficiary: input.beneficiary,
            index,
            amount_total: input.amount_total,
            start: input.start,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct StartVesting<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"schedules", vesting_state.key().as_ref()],
        bump
    )]
    pub schedules: Box<Account<'info, ScheduleSet>>,

    #[account(
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump,
        constraint = vault.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,
}

#[event]
pub struct VestingStarted {
    pub schedule_id: [u8; 32],
    pub beneficiary: Pubkey,
    pub index: u64,
    pub amount_total: u64,
    pub start: i64,
}
