use anchor_lang::prelude::*;

/// Custom error codes for the Term Vault program
///
/// Every precondition failure has its own variant so callers can tell
/// exactly which check rejected the call. Operand context (requested
/// amount vs. limit, caller vs. owner) is logged via msg! at the
/// rejection site.
#[error_code]
pub enum VaultError {
    #[msg("Deposit amount must be greater than zero")]
    ZeroDepositAmount,

    #[msg("Deposit amount is below the vault minimum")]
    DepositBelowMinimum,

    #[msg("Deposit would exceed the vault cap")]
    DepositCapExceeded,

    #[msg("Term index is out of range for this vault's schedule")]
    InvalidTermIndex,

    #[msg("Vault is paused - deposits are not being admitted")]
    VaultPaused,

    #[msg("Position does not exist")]
    PositionNotFound,

    #[msg("Caller is not the current owner of this position")]
    NotPositionOwner,

    #[msg("Position has not reached maturity")]
    PositionNotMatured,

    #[msg("Position has already been redeemed")]
    PositionAlreadyRedeemed,

    #[msg("Invalid token mint - does not match vault asset")]
    InvalidMint,

    #[msg("Invalid token account owner")]
    InvalidOwner,

    #[msg("Unauthorized - only the vault admin can perform this action")]
    Unauthorized,

    #[msg("Caller does not hold the yield injector capability")]
    InjectorNotAuthorized,

    #[msg("Injection amount must be greater than zero")]
    ZeroInjectionAmount,

    #[msg("Address already holds an injector grant")]
    InjectorAlreadyGranted,

    #[msg("Injector registry is full - maximum grants reached")]
    InjectorRegistryFull,

    #[msg("Address has no injector grant to toggle")]
    InjectorNotFound,

    #[msg("Term schedule must contain at least one term")]
    EmptyTermSchedule,

    #[msg("Term durations and rates must have the same length")]
    TermScheduleLengthMismatch,

    #[msg("Term schedule exceeds the maximum number of terms")]
    TooManyTerms,

    #[msg("Term duration must be greater than zero")]
    ZeroTermDuration,

    #[msg("Math overflow occurred during calculation")]
    MathOverflow,

    #[msg("Vault custody balance is below the required payout - aggregate invariant violated")]
    InsufficientCustodyBalance,
}
