//! # WillVault Service
//!
//! Application service layer that implements the `WillVaultApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`WillVaultApi`)
//! - Uses the outbound ports (`Ledger`, `Signer`, `TimeSource`)
//! - Delegates codec, role checks, and transition rules to the domain layer
//!
//! Every guard check runs strictly before any mutation: a refused
//! transition leaves the stored record byte-for-byte unchanged. `create`
//! performs two ledger writes (record, then catalog append); the append is
//! linearizable via compare-and-swap, but there is no cross-key
//! transaction, so a crash between the two writes can still leave a stored
//! record outside the catalog.

use crate::adapters::memory_ledger::InMemoryLedger;
use crate::domain::entities::{Will, WillParams};
use crate::domain::errors::WillVaultError;
use crate::domain::value_objects::{Address, ChallengeParams, WillId, WillStatus};
use crate::domain::{access, challenge, codec};
use crate::ports::inbound::WillVaultApi;
use crate::ports::outbound::{Ledger, Signer, SystemTimeSource, TimeSource};
use crate::storage::key_index::KeyIndex;
use crate::storage::record_store::WillStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// WillVault application service.
pub struct WillVaultService<L: Ledger, S: Signer, T: TimeSource> {
    store: WillStore<L>,
    index: KeyIndex<L>,
    signer: S,
    time: T,
}

impl<L: Ledger, S: Signer, T: TimeSource> WillVaultService<L, S, T> {
    /// Create a service over the given ledger, signer, and time source.
    pub fn new(ledger: Arc<L>, signer: S, time: T) -> Self {
        Self {
            store: WillStore::new(Arc::clone(&ledger)),
            index: KeyIndex::new(ledger),
            signer,
            time,
        }
    }

    /// Enumerate the wills the caller participates in as owner or executor.
    pub async fn list_wills_for(&self, caller: &Address) -> Result<Vec<Will>, WillVaultError> {
        let wills = self.store.list_all(&self.index).await?;
        Ok(access::involving(&wills, caller))
    }

    /// Load a will that must exist, for a mutating operation.
    async fn load_required(&self, id: &WillId) -> Result<Will, WillVaultError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| WillVaultError::NotFound { id: id.to_string() })
    }
}

impl<S: Signer> WillVaultService<InMemoryLedger, S, SystemTimeSource> {
    /// Create a service with in-memory adapters.
    pub fn in_memory(signer: S) -> Self {
        Self::new(Arc::new(InMemoryLedger::new()), signer, SystemTimeSource)
    }
}

#[async_trait]
impl<L: Ledger, S: Signer, T: TimeSource> WillVaultApi for WillVaultService<L, S, T> {
    async fn create_will(
        &self,
        owner: Address,
        beneficiary: Address,
        executor: Address,
        asset_value: f64,
        conditions: String,
    ) -> Result<Will, WillVaultError> {
        let will = Will::new(WillParams {
            id: WillId::generate(self.time.now_millis()),
            obfuscated_value: codec::encode(asset_value),
            created_at: self.time.now(),
            owner,
            beneficiary,
            executor,
            conditions,
        });

        // Record first, then catalog: a cataloged id must always resolve.
        self.store.put(&will).await?;
        self.index.append(&will.id).await?;

        info!(id = %will.id, owner = %will.owner, "will created");
        Ok(will)
    }

    async fn activate(&self, id: &WillId, caller: &Address) -> Result<Will, WillVaultError> {
        let mut will = self.load_required(id).await?;
        if !access::is_owner(&will, caller) {
            return Err(WillVaultError::Forbidden {
                role: "owner",
                operation: "activate",
            });
        }
        will.transition_to(WillStatus::Active)?;
        self.store.put(&will).await?;

        info!(id = %will.id, "will activated");
        Ok(will)
    }

    async fn execute(&self, id: &WillId, caller: &Address) -> Result<Will, WillVaultError> {
        let mut will = self.load_required(id).await?;
        if !access::is_executor(&will, caller) {
            return Err(WillVaultError::Forbidden {
                role: "executor",
                operation: "execute",
            });
        }
        will.transition_to(WillStatus::Executed)?;
        self.store.put(&will).await?;

        info!(id = %will.id, "will executed");
        Ok(will)
    }

    async fn get_will(&self, id: &WillId) -> Result<Option<Will>, WillVaultError> {
        self.store.get(id).await
    }

    async fn list_wills(&self) -> Result<Vec<Will>, WillVaultError> {
        self.store.list_all(&self.index).await
    }

    async fn reveal_value(
        &self,
        id: &WillId,
        params: &ChallengeParams,
    ) -> Result<f64, WillVaultError> {
        let will = self.load_required(id).await?;

        // Signing must complete before anything is decoded; rejection
        // aborts with no partial effect. The signature bytes are not
        // inspected here (see DESIGN.md on out-of-band verification).
        let message = challenge::build_challenge(params);
        self.signer.sign(&message).await?;

        let value = codec::decode(&will.obfuscated_value)?;
        info!(id = %will.id, "will value revealed");
        Ok(value)
    }
}
