//! # Test Signers
//!
//! Signer adapters for tests and examples. A production deployment wires a
//! wallet-backed signer here; the core never looks at the bytes either way.

use crate::domain::errors::{Signature, SignerError};
use crate::ports::outbound::Signer;
use async_trait::async_trait;
use parking_lot::Mutex;

/// Signer that approves every request and records the message it signed.
///
/// The returned "signature" is just the message bytes; the core never
/// inspects signature content, so any bytes do.
#[derive(Default)]
pub struct ApprovingSigner {
    last_message: Mutex<Option<String>>,
}

impl ApprovingSigner {
    /// Create a fresh approving signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The exact text of the most recent signing request, if any.
    pub fn last_message(&self) -> Option<String> {
        self.last_message.lock().clone()
    }
}

#[async_trait]
impl Signer for ApprovingSigner {
    async fn sign(&self, message: &str) -> Result<Signature, SignerError> {
        *self.last_message.lock() = Some(message.to_string());
        Ok(message.as_bytes().to_vec())
    }
}

/// Signer that models the user cancelling every prompt.
#[derive(Default)]
pub struct RejectingSigner;

#[async_trait]
impl Signer for RejectingSigner {
    async fn sign(&self, _message: &str) -> Result<Signature, SignerError> {
        Err(SignerError::Rejected)
    }
}
