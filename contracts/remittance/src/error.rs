use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotOwner = 1,
    NotSource = 2,
    InvalidAmount = 3,
    ZeroCommitment = 4,
    ZeroSecret = 5,
    InvalidDeltaBlocks = 6,
    InvalidOwner = 7,
    InvalidMaxDeltaBlocks = 8,
    CommitmentInUse = 9,
    PaymentNotFound = 10,
    ContractPaused = 11,
    ContractNotPaused = 12,
    PaymentExpired = 13,
    PaymentNotExpired = 14,
    TransferFailed = 15,
}

/// Coarse classification of [`Error`] values, for callers that only care
/// about why an invocation was rejected rather than which check tripped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The caller lacks the role the operation requires.
    AccessDenied,
    /// An argument is zero, empty or out of range.
    InvalidArgument,
    /// The stored state does not admit the operation.
    StateConflict,
    /// The current ledger sequence is outside the redemption window.
    WindowViolation,
    /// Moving value out of (or into) the contract failed.
    TransferFailure,
}

impl Error {
    pub const fn kind(self) -> ErrorKind {
        match self {
            Error::NotOwner | Error::NotSource => ErrorKind::AccessDenied,
            Error::InvalidAmount
            | Error::ZeroCommitment
            | Error::ZeroSecret
            | Error::InvalidDeltaBlocks
            | Error::InvalidOwner
            | Error::InvalidMaxDeltaBlocks => ErrorKind::InvalidArgument,
            Error::CommitmentInUse
            | Error::PaymentNotFound
            | Error::ContractPaused
            | Error::ContractNotPaused => ErrorKind::StateConflict,
            Error::PaymentExpired | Error::PaymentNotExpired => ErrorKind::WindowViolation,
            Error::TransferFailed => ErrorKind::TransferFailure,
        }
    }
}
