//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the vault requires the host application to implement:
//! the ledger substrate, the signing collaborator, and a time source.

use crate::domain::errors::{LedgerError, Signature, SignerError};
use async_trait::async_trait;

/// Abstract byte-addressed key-value ledger.
///
/// The vault treats this as its sole persistence substrate. Keys are plain
/// strings chosen by the storage layer; an empty value means "entry does
/// not exist".
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Readiness probe. Reads treat `false` as "no data available", not an
    /// error; writes refuse to proceed.
    async fn is_available(&self) -> Result<bool, LedgerError>;

    /// Read an entry. Empty bytes mean the entry does not exist.
    async fn get_data(&self, key: &str) -> Result<Vec<u8>, LedgerError>;

    /// Write an entry, unconditionally overwriting any prior value.
    async fn set_data(&self, key: &str, value: &[u8]) -> Result<(), LedgerError>;

    /// Write an entry only if its current value equals `expected`.
    ///
    /// Empty `expected` means "only if the entry does not exist". Returns
    /// whether the swap was applied. The catalog append loop relies on this
    /// to stay linearizable under concurrent writers.
    async fn set_data_if(
        &self,
        key: &str,
        expected: &[u8],
        value: &[u8],
    ) -> Result<bool, LedgerError>;
}

/// Asynchronous signing collaborator.
///
/// May reject on user cancellation; the signature's content is never
/// inspected by the core.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Sign the exact message text, or fail with
    /// [`SignerError::Rejected`] when the user cancels.
    async fn sign(&self, message: &str) -> Result<Signature, SignerError>;
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current time, seconds since epoch.
    fn now(&self) -> u64;

    /// Current time, milliseconds since epoch. Used for id generation.
    fn now_millis(&self) -> u64;
}

/// Default time source using system time.
#[derive(Default)]
pub struct SystemTimeSource;

impl SystemTimeSource {
    fn since_epoch() -> std::time::Duration {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> u64 {
        Self::since_epoch().as_secs()
    }

    fn now_millis(&self) -> u64 {
        Self::since_epoch().as_millis() as u64
    }
}
