use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Amount is below the configured minimum stake")]
    AmountTooSmall,

    #[msg("Staked balance is insufficient for the requested amount")]
    InsufficientBalance,

    #[msg("No stake record exists for this owner and mint")]
    StakerNotFound,

    #[msg("Cannot close a stake record with a non-zero balance")]
    NonZeroBalance,

    #[msg("Math operation overflowed or underflowed")]
    MathOverflow,

    #[msg("Caller is not the configured admin")]
    NotAuthorized,

    #[msg("Requested amount exceeds the treasury surplus")]
    InsufficientHeadroom,

    #[msg("Global configuration has already been initialized")]
    AlreadyInitialized,

    #[msg("Pool accounting invariant violated")]
    InvariantViolation,

    #[msg("Staking is currently disabled")]
    StakingDisabled,

    #[msg("Invalid timestamp conversion")]
    InvalidTimestamp,

    #[msg("Invalid vault account")]
    InvalidVault,

    #[msg("Address cannot be the default pubkey")]
    ZeroAddress,

    #[msg("Invalid parameter provided")]
    InvalidParam,
}
