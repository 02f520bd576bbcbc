use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::VestingError;
use crate::state::{ScheduleSet, VestingState};

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    require!(
        ctx.accounts.mint.key() != ctx.accounts.payment_mint.key(),
        VestingError::InvalidConfig
    );
    require_keys_eq!(
        ctx.accounts.treasury.mint,
        ctx.accounts.payment_mint.key(),
        VestingError::InvalidTokenMint
    );

    let st = &mut ctx.accounts.vesting_state;
    st.admin = ctx.accounts.admin.key();
    st.mint = ctx.accounts.mint.key();
    st.payment_mint = ctx.accounts.payment_mint.key();
    st.treasury = ctx.accounts.treasury.key();
    st.total_unreleased = 0;
    st.schedule_count = 0;
    st.time_override = 0;

    ctx.accounts.schedules.schedules = Vec::new();

    emit!(VestingInitialized {
        admin: st.admin,
        mint: st.mint,
        payment_mint: st.payment_mint,
        treasury: st.treasury,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingState::SIZE,
        seeds = [b"vesting_state"],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = admin,
        space = ScheduleSet::space(),
        seeds = [b"schedules", vesting_state.key().as_ref()],
        bump
    )]
    pub schedules: Box<Account<'info, ScheduleSet>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = vesting_state,
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub payment_mint: Account<'info, Mint>,

    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub payment_mint: Pubkey,
    pub treasury: Pubkey,
}
