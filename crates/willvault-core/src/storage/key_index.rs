//! # Key Index
//!
//! The catalog: a single ledger entry holding the ordered JSON array of all
//! record ids. Reads degrade gracefully (missing or malformed catalog reads
//! as empty); appends go through a compare-and-swap retry loop so that
//! concurrent creates never lose an id.

use crate::domain::errors::{LedgerError, WillVaultError};
use crate::domain::value_objects::WillId;
use crate::ports::outbound::Ledger;
use std::sync::Arc;
use tracing::{debug, warn};

/// Ledger key of the catalog entry.
pub const CATALOG_KEY: &str = "will_keys";

/// Compare-and-swap attempts before an append reports contention.
const MAX_CAS_ATTEMPTS: u32 = 16;

/// Maintains the catalog of record ids.
pub struct KeyIndex<L: Ledger> {
    ledger: Arc<L>,
}

impl<L: Ledger> KeyIndex<L> {
    /// Create an index over the given ledger.
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    /// Enumerate all cataloged ids, in append order.
    ///
    /// An unavailable ledger, a missing entry, and a malformed entry all
    /// read as empty; only transport failures surface.
    pub async fn list(&self) -> Result<Vec<WillId>, WillVaultError> {
        if !self.ledger.is_available().await? {
            debug!("ledger not available, catalog reads as empty");
            return Ok(Vec::new());
        }

        let bytes = self.ledger.get_data(CATALOG_KEY).await?;
        Ok(Self::parse_catalog(&bytes))
    }

    /// Register an id in the catalog.
    ///
    /// Read-modify-write with compare-and-swap: on contention the read and
    /// append are retried against the fresh catalog, so a concurrent append
    /// is never overwritten. Ids are not deduplicated.
    pub async fn append(&self, id: &WillId) -> Result<(), WillVaultError> {
        if !self.ledger.is_available().await? {
            return Err(WillVaultError::Unavailable);
        }

        for attempt in 0..MAX_CAS_ATTEMPTS {
            let current = self.ledger.get_data(CATALOG_KEY).await?;
            let mut ids = Self::parse_catalog(&current);
            ids.push(id.clone());

            let updated = serde_json::to_vec(&ids)
                .map_err(|e| LedgerError::Io(format!("catalog serialization: {e}")))?;

            if self
                .ledger
                .set_data_if(CATALOG_KEY, &current, &updated)
                .await?
            {
                debug!(id = %id, attempt, "catalog append committed");
                return Ok(());
            }
            debug!(id = %id, attempt, "catalog append lost the swap, retrying");
        }

        Err(LedgerError::ContentionExhausted {
            attempts: MAX_CAS_ATTEMPTS,
        }
        .into())
    }

    fn parse_catalog(bytes: &[u8]) -> Vec<WillId> {
        if bytes.is_empty() {
            return Vec::new();
        }
        match serde_json::from_slice::<Vec<String>>(bytes) {
            Ok(ids) => ids.into_iter().map(WillId::from).collect(),
            Err(e) => {
                warn!(key = CATALOG_KEY, error = %e, "malformed catalog entry, treating as empty");
                Vec::new()
            }
        }
    }
}
