use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("2NcNBegxF9ZZugjkw89hEErPJQzhzbChB6LU7nhakgqj");

#[program]
pub mod token_vesting {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    pub fn fund_pool(ctx: Context<FundPool>, amount: u64) -> Result<()> {
        instructions::fund_pool::fund_pool(ctx, amount)
    }

    pub fn start_vesting(ctx: Context<StartVesting>, inputs: Vec<ScheduleInput>) -> Result<()> {
        instructions::start_vesting::start_vesting(ctx, inputs)
    }

    pub fn release(ctx: Context<Release>, schedule_id: [u8; 32], amount: u64) -> Result<()> {
        instructions::release::release(ctx, schedule_id, amount)
    }

    pub fn revoke(ctx: Context<Revoke>, schedule_id: [u8; 32]) -> Result<()> {
        instructions::revoke::revoke(ctx, schedule_id)
    }

    pub fn release_revoked(ctx: Context<ReleaseRevoked>, schedule_id: [u8; 32]) -> Result<()> {
        instructions::release_revoked::release_revoked(ctx, schedule_id)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::withdraw(ctx, amount)
    }

    pub fn set_current_time(ctx: Context<SetCurrentTime>, timestamp: i64) -> Result<()> {
        instructions::set_current_time::set_current_time(ctx, timestamp)
    }

    pub fn emit_releasable_quote(
        ctx: Context<EmitReleasableQuote>,
        schedule_id: [u8; 32],
    ) -> Result<()> {
        instructions::emit_releasable_quote::emit_releasable_quote(ctx, schedule_id)
    }
}
