//! # Domain Value Objects
//!
//! Immutable value types for the WillVault core: addresses, record ids,
//! lifecycle status, and reveal-challenge parameters.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the random suffix in a generated [`WillId`].
const ID_SUFFIX_LEN: usize = 7;

/// Alphabet for id suffixes (base36, lowercase).
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A caller or record-party address with case-insensitive identity.
///
/// Normalization to canonical lowercase happens here, at the type boundary,
/// so every internal comparison is plain equality. Serde passes through this
/// constructor on deserialization, which normalizes addresses read back from
/// the ledger as well.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Create a normalized address from arbitrary-cased input.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    /// The canonical lowercase form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Address {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque, globally unique record identifier.
///
/// Generated ids use the `{unix_millis}-{7 base36 chars}` shape; uniqueness
/// is the only hard requirement, and callers may supply any opaque string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WillId(String);

impl WillId {
    /// Generate a fresh id from a millisecond timestamp plus random suffix.
    pub fn generate(now_millis: u64) -> Self {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        Self(format!("{now_millis}-{suffix}"))
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WillId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for WillId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for WillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state machine for a will record.
///
/// The only legal transitions move forward: Draft -> Active -> Executed.
/// Executed is terminal. No back-transitions, no deletion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WillStatus {
    /// Authored but not yet in force.
    #[default]
    Draft,
    /// In force, awaiting execution by the designated executor.
    Active,
    /// Executed by the executor. Terminal.
    Executed,
}

impl WillStatus {
    /// Check if a transition is valid.
    pub fn can_transition_to(&self, next: WillStatus) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Active) | (Self::Active, Self::Executed)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Executed)
    }

    /// Lowercase wire name (matches the stored JSON form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Executed => "executed",
        }
    }
}

impl fmt::Display for WillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to the reveal challenge, passed explicitly per reveal session.
///
/// These were ambient UI state in earlier designs; here they are an explicit
/// configuration value so the challenge is deterministic and testable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeParams {
    /// Session public key (hex string).
    pub public_key: String,
    /// Ledger (contract) address.
    pub contract_address: String,
    /// Chain id of the ledger.
    pub chain_id: u64,
    /// Session start, seconds since epoch.
    pub start_timestamp: u64,
    /// Session validity window in days.
    pub duration_days: u32,
}

impl ChallengeParams {
    /// Default session validity window.
    pub const DEFAULT_DURATION_DAYS: u32 = 30;

    /// Create params with the default 30-day duration.
    pub fn new(
        public_key: impl Into<String>,
        contract_address: impl Into<String>,
        chain_id: u64,
        start_timestamp: u64,
    ) -> Self {
        Self {
            public_key: public_key.into(),
            contract_address: contract_address.into(),
            chain_id,
            start_timestamp,
            duration_days: Self::DEFAULT_DURATION_DAYS,
        }
    }
}
