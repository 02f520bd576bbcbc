use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{ScheduleSet, VestingState};
use crate::utils::{accrual, time};

/// Release everything currently releasable across all of the caller's
/// schedules in one step, settling the purchase price in payment tokens to
/// the treasury first. Revoked-locked schedules contribute nothing.
pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let vesting_state_ai = ctx.accounts.vesting_state.to_account_info();
    let vesting_state_bump = ctx.bumps.vesting_state;

    let st = &ctx.accounts.vesting_state;
    let beneficiary = ctx.accounts.beneficiary.key();

    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        beneficiary,
        VestingError::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.payment_source.mint,
        st.payment_mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.payment_source.owner,
        beneficiary,
        VestingError::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.treasury.key(),
        st.treasury,
        VestingError::InvalidTokenAccount
    );

    let now = time::current_time(st)?;

    // First pass: per-schedule releasable and settlement due.
    let schedules = &ctx.accounts.schedules;
    let mut claims: Vec<(usize, u64)> = Vec::new();
    let mut total: u64 = 0;
    let mut settlement_due: u64 = 0;
    let mut owns_schedule = false;
    for (idx, s) in schedules.schedules.iter().enumerate() {
        if s.beneficiary != beneficiary {
            continue;
        }
        owns_schedule = true;
        let releasable = s.releasable_amount(now)?;
        if releasable == 0 {
            continue;
        }
        let due = accrual::settlement_due(releasable, s.price)?;
        settlement_due = settlement_due
            .checked_add(due)
            .ok_or(VestingError::MathOverflow)?;
        total = total
            .checked_add(releasable)
            .ok_or(VestingError::MathOverflow)?;
        claims.push((idx, releasable));
    }
    require!(owns_schedule, VestingError::ScheduleNotFound);

    if total == 0 {
        return Ok(());
    }
    require!(
        ctx.accounts.vault.amount >= total,
        VestingError::TransferFailed
    );

    // Settlement leg: payment tokens from the claimer to the treasury,
    // authorized by the claimer's own signature.
    if settlement_due > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.payment_source.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: ctx.accounts.beneficiary.to_account_info(),
                },
            ),
            settlement_due,
        )?;
    }

    // Vesting leg: vault to beneficiary, signed by the state PDA. Both legs
    // and the counter updates below commit atomically with the transaction.
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
        total,
    )?;

    let schedules = &mut ctx.accounts.schedules;
    for (idx, releasable) in claims.iter() {
        schedules.schedules[*idx].apply_release(*releasable, now)?;
    }

    let st = &mut ctx.accounts.vesting_state;
    st.total_unreleased = st
        .total_unreleased
        .checked_sub(total)
        .ok_or(VestingError::MathOverflow)?;

    emit!(TokensClaimed {
        beneficiary,
        amount: total,
        settlement_paid: settlement_due,
        schedules_touched: claims.len() as u32,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
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

    /// Claimer's payment token account funding the settlement leg.
    #[account(mut)]
    pub payment_source: Account<'info, TokenAccount>,

    /// Treasury payment account registered at initialization.
    #[account(mut)]
    pub treasury: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub settlement_paid: u64,
    pub schedules_touched: u32,
}
