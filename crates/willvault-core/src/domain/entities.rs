//! # Domain Entities
//!
//! The will record and its lifecycle behavior.

use super::errors::WillVaultError;
use super::value_objects::{Address, WillId, WillStatus};
use serde::{Deserialize, Serialize};

/// A testament record.
///
/// The asset value is held only in obfuscated form; nothing outside the
/// codec interprets it. `owner` and `created_at` are set once at creation
/// and never mutated; `status` only moves forward through the lifecycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Will {
    /// Unique identifier.
    pub id: WillId,
    /// Codec output for the asset value.
    pub obfuscated_value: String,
    /// Creation time, seconds since epoch.
    pub created_at: u64,
    /// Authoring party. Immutable after creation.
    pub owner: Address,
    /// Party with read-visibility of the record.
    pub beneficiary: Address,
    /// Party allowed to execute the will once active.
    pub executor: Address,
    /// Current lifecycle state.
    pub status: WillStatus,
    /// Free-form conditions text, uninterpreted by the core.
    pub conditions: String,
}

/// Parameters for creating a will record.
#[derive(Clone, Debug, PartialEq)]
pub struct WillParams {
    /// Unique identifier.
    pub id: WillId,
    /// Codec output for the asset value.
    pub obfuscated_value: String,
    /// Creation time, seconds since epoch.
    pub created_at: u64,
    /// Authoring party.
    pub owner: Address,
    /// Beneficiary party.
    pub beneficiary: Address,
    /// Executor party.
    pub executor: Address,
    /// Free-form conditions text.
    pub conditions: String,
}

impl Will {
    /// Create a new will in the initial draft state.
    pub fn new(params: WillParams) -> Self {
        Self {
            id: params.id,
            obfuscated_value: params.obfuscated_value,
            created_at: params.created_at,
            owner: params.owner,
            beneficiary: params.beneficiary,
            executor: params.executor,
            status: WillStatus::Draft,
            conditions: params.conditions,
        }
    }

    /// Transition to a new lifecycle state.
    ///
    /// Fails without mutating if the move is not a legal forward step.
    pub fn transition_to(&mut self, next: WillStatus) -> Result<(), WillVaultError> {
        if !self.status.can_transition_to(next) {
            return Err(WillVaultError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

/// Per-status record counts, as shown on overview surfaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Records in draft.
    pub draft: usize,
    /// Records in force.
    pub active: usize,
    /// Executed records.
    pub executed: usize,
}

impl StatusCounts {
    /// Tally a set of records by status.
    pub fn tally(wills: &[Will]) -> Self {
        let mut counts = Self::default();
        for will in wills {
            match will.status {
                WillStatus::Draft => counts.draft += 1,
                WillStatus::Active => counts.active += 1,
                WillStatus::Executed => counts.executed += 1,
            }
        }
        counts
    }

    /// Total records tallied.
    pub fn total(&self) -> usize {
        self.draft + self.active + self.executed
    }
}
