//! # Inbound Ports
//!
//! API trait defining what the vault can do for its callers.

use crate::domain::entities::Will;
use crate::domain::errors::WillVaultError;
use crate::domain::value_objects::{Address, ChallengeParams, WillId};
use async_trait::async_trait;

/// Vault API - inbound port.
#[async_trait]
pub trait WillVaultApi: Send + Sync {
    /// Author a new will in draft state. The asset value is obfuscated
    /// before anything is written to the ledger.
    async fn create_will(
        &self,
        owner: Address,
        beneficiary: Address,
        executor: Address,
        asset_value: f64,
        conditions: String,
    ) -> Result<Will, WillVaultError>;

    /// Move a draft will into force. Owner only.
    async fn activate(&self, id: &WillId, caller: &Address) -> Result<Will, WillVaultError>;

    /// Execute an active will. Executor only. Terminal.
    async fn execute(&self, id: &WillId, caller: &Address) -> Result<Will, WillVaultError>;

    /// Load a single will by id. `None` if no entry exists; a present but
    /// unparseable entry surfaces as `MalformedData`.
    async fn get_will(&self, id: &WillId) -> Result<Option<Will>, WillVaultError>;

    /// Enumerate all cataloged wills, newest first. Corrupt entries are
    /// skipped, never fatal.
    async fn list_wills(&self) -> Result<Vec<Will>, WillVaultError>;

    /// Reveal a will's asset value after the caller signs the session
    /// challenge. Rejection aborts with `UserRejected` and the value is
    /// never decoded.
    async fn reveal_value(
        &self,
        id: &WillId,
        params: &ChallengeParams,
    ) -> Result<f64, WillVaultError>;
}
