//! # In-Memory Ledger
//!
//! Ledger adapter backed by a process-local map. Used by unit and
//! integration tests, and as the reference for the compare-and-swap
//! semantics a production substrate must provide.

use crate::domain::errors::LedgerError;
use crate::ports::outbound::Ledger;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory ledger with toggles for availability and write failures.
#[derive(Default)]
pub struct InMemoryLedger {
    data: RwLock<HashMap<String, Vec<u8>>>,
    available: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryLedger {
    /// Create an empty, available ledger.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Toggle the readiness probe result.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Make subsequent writes fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored entries (test introspection).
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the ledger holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    fn check_writable(&self) -> Result<(), LedgerError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(LedgerError::Io("simulated write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Ledger for InMemoryLedger {
    async fn is_available(&self) -> Result<bool, LedgerError> {
        Ok(self.available.load(Ordering::SeqCst))
    }

    async fn get_data(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        Ok(self.data.read().get(key).cloned().unwrap_or_default())
    }

    async fn set_data(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.check_writable()?;
        self.data.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn set_data_if(
        &self,
        key: &str,
        expected: &[u8],
        value: &[u8],
    ) -> Result<bool, LedgerError> {
        self.check_writable()?;
        // Single write lock makes the read-compare-write atomic.
        let mut data = self.data.write();
        let current = data.get(key).map(Vec::as_slice).unwrap_or_default();
        if current != expected {
            return Ok(false);
        }
        data.insert(key.to_string(), value.to_vec());
        Ok(true)
    }
}
