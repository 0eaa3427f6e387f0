use anchor_lang::prelude::*;

/// Custom error codes for the vesting registry program.
#[error_code]
pub enum VestingError {
    #[msg("Vesting already started")]
    AlreadyStarted,

    #[msg("Vesting already active")]
    AlreadyActive,

    #[msg("Vesting not started")]
    NotStarted,

    #[msg("Access denied: timelock signature required")]
    AccessDenied,

    #[msg("Ownership required: owner signature required")]
    OwnershipRequired,

    #[msg("Agreement is not interruptible once active")]
    CannotInterrupt,

    #[msg("Delegation is only allowed on reverse vesting")]
    DelegationNotAllowed,

    #[msg("Invalid parameters")]
    InvalidParameters,

    #[msg("Instruction does not match the agreement funding mode")]
    FundingModeMismatch,

    #[msg("Agreement was interrupted")]
    AgreementInterrupted,

    #[msg("Escrow holds less than the vesting amount")]
    InsufficientEscrow,

    #[msg("Funding source has not approved the vesting amount")]
    InsufficientAllowance,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Recipient registry is full")]
    RecipientListFull,

    #[msg("Agreement list for recipient is full")]
    AgreementListFull,

    #[msg("Sweep not allowed: agreement is not terminal")]
    SweepNotAllowed,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Result type for the pure state transitions, lifted into Anchor errors with `?`.
pub type VestingResult<T> = core::result::Result<T, VestingError>;
