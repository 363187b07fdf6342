use anchor_lang::prelude::*;

/// Custom error codes for the token vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Invalid beneficiary public key")]
    InvalidBeneficiary,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid start timestamp")]
    InvalidTimestamp,

    #[msg("Invalid duration (must be > 0)")]
    InvalidDuration,

    #[msg("Cliff exceeds vesting duration")]
    InvalidCliff,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Schedule is already revoked")]
    AlreadyRevoked,

    #[msg("Vault balance cannot cover the new commitment")]
    InsufficientVaultBalance,

    #[msg("Amount exceeds the withdrawable surplus")]
    ExceedsAvailable,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
