//! # Record Store
//!
//! Serializes individual will records to and from their ledger entries.
//!
//! ## Wire Format
//!
//! Each record lives at `will_{id}` as a UTF-8 JSON object with exactly the
//! fields `data`, `timestamp`, `owner`, `beneficiary`, `executor`, `status`,
//! `conditions`. The names and the key scheme are fixed for
//! interoperability with existing ledger contents; legacy entries may lack
//! `status` (defaults to draft) or `conditions` (defaults to empty).

use crate::domain::entities::{Will, WillParams};
use crate::domain::errors::WillVaultError;
use crate::domain::value_objects::{Address, WillId, WillStatus};
use crate::ports::outbound::Ledger;
use crate::storage::key_index::KeyIndex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Prefix of per-record ledger keys.
const RECORD_KEY_PREFIX: &str = "will_";

/// Ledger key for a record id.
pub fn record_key(id: &WillId) -> String {
    format!("{RECORD_KEY_PREFIX}{id}")
}

/// On-ledger shape of a will record. The id is carried by the key, not the
/// entry.
#[derive(Debug, Serialize, Deserialize)]
struct StoredWill {
    data: String,
    timestamp: u64,
    owner: Address,
    beneficiary: Address,
    executor: Address,
    #[serde(default)]
    status: WillStatus,
    #[serde(default)]
    conditions: String,
}

impl StoredWill {
    fn from_will(will: &Will) -> Self {
        Self {
            data: will.obfuscated_value.clone(),
            timestamp: will.created_at,
            owner: will.owner.clone(),
            beneficiary: will.beneficiary.clone(),
            executor: will.executor.clone(),
            status: will.status,
            conditions: will.conditions.clone(),
        }
    }

    fn into_will(self, id: WillId) -> Will {
        let mut will = Will::new(WillParams {
            id,
            obfuscated_value: self.data,
            created_at: self.timestamp,
            owner: self.owner,
            beneficiary: self.beneficiary,
            executor: self.executor,
            conditions: self.conditions,
        });
        will.status = self.status;
        will
    }
}

/// Persists will records against the ledger.
pub struct WillStore<L: Ledger> {
    ledger: Arc<L>,
}

impl<L: Ledger> WillStore<L> {
    /// Create a store over the given ledger.
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    /// Load a record by id.
    ///
    /// `None` when the ledger is unavailable or no entry exists. A present
    /// but unparseable entry is a `MalformedData` error; enumeration
    /// callers downgrade it, explicit loads surface it.
    pub async fn get(&self, id: &WillId) -> Result<Option<Will>, WillVaultError> {
        if !self.ledger.is_available().await? {
            return Ok(None);
        }

        let key = record_key(id);
        let bytes = self.ledger.get_data(&key).await?;
        if bytes.is_empty() {
            return Ok(None);
        }

        let stored: StoredWill =
            serde_json::from_slice(&bytes).map_err(|e| WillVaultError::MalformedData {
                key,
                reason: e.to_string(),
            })?;
        Ok(Some(stored.into_will(id.clone())))
    }

    /// Write a record, unconditionally overwriting any prior entry.
    pub async fn put(&self, will: &Will) -> Result<(), WillVaultError> {
        if !self.ledger.is_available().await? {
            return Err(WillVaultError::Unavailable);
        }

        let bytes = serde_json::to_vec(&StoredWill::from_will(will))
            .map_err(|e| WillVaultError::MalformedData {
                key: record_key(&will.id),
                reason: e.to_string(),
            })?;
        self.ledger.set_data(&record_key(&will.id), &bytes).await?;
        debug!(id = %will.id, status = %will.status, "will record written");
        Ok(())
    }

    /// Materialize every cataloged record, newest first.
    ///
    /// Absent entries are skipped; malformed entries are logged and skipped
    /// so one corrupt record never blocks enumeration of the rest.
    pub async fn list_all(&self, index: &KeyIndex<L>) -> Result<Vec<Will>, WillVaultError> {
        let mut wills = Vec::new();
        for id in index.list().await? {
            match self.get(&id).await {
                Ok(Some(will)) => wills.push(will),
                Ok(None) => debug!(id = %id, "cataloged id has no record entry, skipping"),
                Err(WillVaultError::MalformedData { key, reason }) => {
                    warn!(key = %key, reason = %reason, "skipping malformed will record");
                }
                Err(e) => return Err(e),
            }
        }
        wills.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(wills)
    }
}
