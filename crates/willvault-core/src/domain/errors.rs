//! # Domain Errors
//!
//! Error types for the WillVault core.
//!
//! ## Design Principles
//!
//! - Each failure mode is a distinct, typed variant
//! - Per-record parse failures during enumeration are logged and skipped;
//!   everything else surfaces to the caller
//! - No panics in domain logic (use Result instead)

use super::value_objects::WillStatus;
use thiserror::Error;

/// Opaque signature bytes returned by a [`Signer`](crate::ports::outbound::Signer).
///
/// The core never inspects the content.
pub type Signature = Vec<u8>;

/// Errors surfaced by vault operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WillVaultError {
    /// No record exists under this id.
    #[error("will not found: {id}")]
    NotFound {
        /// The id that failed to resolve.
        id: String,
    },

    /// Caller lacks the role required for the requested transition.
    #[error("caller is not the {role} of this will (operation: {operation})")]
    Forbidden {
        /// Role the operation requires.
        role: &'static str,
        /// Operation that was refused.
        operation: &'static str,
    },

    /// Record exists but is not in the required source state.
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: WillStatus,
        /// Requested status.
        to: WillStatus,
    },

    /// Signing operation cancelled by the caller.
    #[error("signing rejected by user")]
    UserRejected,

    /// A ledger entry exists but fails to parse.
    #[error("malformed ledger entry at {key}: {reason}")]
    MalformedData {
        /// Ledger key holding the bad entry.
        key: String,
        /// Parse failure detail.
        reason: String,
    },

    /// Ledger is not ready to accept writes.
    #[error("ledger unavailable")]
    Unavailable,

    /// Ledger transport failure.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Obfuscated value could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Signing operation failed for a reason other than user cancellation.
    #[error("signing failed: {0}")]
    SigningFailed(String),
}

impl From<SignerError> for WillVaultError {
    fn from(err: SignerError) -> Self {
        match err {
            SignerError::Rejected => WillVaultError::UserRejected,
            SignerError::Failed(message) => WillVaultError::SigningFailed(message),
        }
    }
}

/// Ledger transport errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// I/O failure during read/write.
    #[error("ledger I/O error: {0}")]
    Io(String),

    /// Catalog compare-and-swap kept losing to concurrent writers.
    #[error("catalog contention: {attempts} compare-and-swap attempts exhausted")]
    ContentionExhausted {
        /// Number of attempts made before giving up.
        attempts: u32,
    },
}

/// Signer collaborator errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    /// User cancelled the signing prompt.
    #[error("user rejected signing")]
    Rejected,

    /// Signing failed for another reason.
    #[error("signer failure: {0}")]
    Failed(String),
}

/// Codec decode errors.
///
/// Malformed input is always a typed error, never a not-a-number sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Tagged payload is not valid base64.
    #[error("invalid base64 payload")]
    InvalidBase64,

    /// Decoded payload is not valid UTF-8.
    #[error("payload is not valid UTF-8")]
    InvalidUtf8,

    /// Decoded (or untagged) text does not parse as a number.
    #[error("not a numeric value: {text:?}")]
    InvalidNumber {
        /// The text that failed to parse.
        text: String,
    },
}
