use anchor_lang::prelude::*;

/// Custom error codes for the token vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: only beneficiary and owner can release vested tokens")]
    Unauthorized,

    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unknown vesting schedule id")]
    ScheduleNotFound,

    #[msg("Schedule set is full")]
    ScheduleSetFull,

    #[msg("Invalid allocation (must be > 0)")]
    InvalidAllocation,

    #[msg("Invalid schedule configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Unallocated pool cannot cover the requested amount")]
    InsufficientPool,

    #[msg("Schedule is revoked")]
    Revoked,

    #[msg("Schedule is not revocable")]
    NotRevocable,

    #[msg("Schedule is not in the revoked-locked state")]
    NotRevoked,

    #[msg("Requested amount exceeds the releasable amount")]
    ExceedsReleasable,

    #[msg("Token transfer cannot be fulfilled by the vault")]
    TransferFailed,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Math overflow")]
    MathOverflow,
}
