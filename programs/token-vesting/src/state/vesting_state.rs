use anchor_lang::prelude::*;

/// Global vesting configuration PDA.
#[account]
pub struct VestingState {
    /// Admin authority (owner of the custodial pool).
    pub admin: Pubkey,
    /// Mint of the vested token.
    pub mint: Pubkey,
    /// Mint of the settlement (payment) token used by `claim`.
    pub payment_mint: Pubkey,
    /// Settlement token account receiving claim payments.
    pub treasury: Pubkey,
    /// Sum of `amount_total - released` over all schedules; the slice of the
    /// vault reserved for vesting. `vault.amount - total_unreleased` is the
    /// unallocated pool available to `start_vesting` and `withdraw`.
    pub total_unreleased: u64,
    /// Number of schedules ever created.
    pub schedule_count: u64,
    /// Simulated clock override (Unix seconds). 0 means use the ledger clock.
    pub time_override: i64,
}

impl VestingState {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        32 + // payment_mint
        32 + // treasury
        8 +  // total_unreleased
        8 +  // schedule_count
        8;   // time_override
}
