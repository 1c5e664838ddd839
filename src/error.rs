//! Error types for spend authorization
//!
//! An authorization that simply does not hold is reported as `Ok(false)`.
//! The variants below are reserved for inputs that cannot be evaluated at all.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsensusError {
    #[error("Unsupported signature version: {0}")]
    UnsupportedVersion(u32),

    #[error("Invalid public key length: expected {expected}, got {actual}")]
    PublicKeyLength { expected: usize, actual: usize },

    #[error("Invalid signature length: expected {expected}, got {actual}")]
    SignatureLength { expected: usize, actual: usize },

    #[error("Invalid address length: expected {expected}, got {actual}")]
    AddressLength { expected: usize, actual: usize },

    #[error("Invalid message length: expected {expected}, got {actual}")]
    MessageLength { expected: usize, actual: usize },

    #[error("Public key count {pubkeys} does not match signature count {signatures}")]
    LengthMismatch { pubkeys: usize, signatures: usize },

    #[error("Empty roster entry at position {0}")]
    EmptyRosterEntry(usize),

    #[error("Malformed multi-signature roster: {0}")]
    Roster(#[from] RosterError),

    #[error("Emission schedule error: {0}")]
    Emission(String),
}

/// Structural faults in a multi-signature roster encoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("no signing keys supplied")]
    NoSigners,

    #[error("roster of {0} entries exceeds the maximum")]
    TooLarge(usize),

    #[error("entry {index} has length {actual}, expected {expected}")]
    EntryLength {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("position {0} appears more than once")]
    DuplicatePosition(u8),

    #[error("position {position} outside roster of size {size}")]
    PositionOutOfRange { position: u8, size: usize },

    #[error("threshold {threshold} exceeds roster size {size}")]
    ThresholdExceedsRoster { threshold: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, ConsensusError>;
