//! # WillVault Core
//!
//! Testament records over an abstract key-value ledger.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Author "will" records whose numeric asset value is reversibly obfuscated
//! before hitting the ledger, and move them through a fixed lifecycle under
//! role-based gating:
//!
//! ```text
//! draft ──activate (owner)──→ active ──execute (executor)──→ executed
//! ```
//!
//! Revealing a stored value is gated behind a deterministic challenge the
//! caller must sign; the signature is a UX gate, not cryptographic access
//! control.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Unique Ids | Record ids are unique across all records ever created |
//! | 2 | Forward-Only Lifecycle | draft → active → executed, no skips, executed terminal |
//! | 3 | Catalog Consistency | Every cataloged id resolves to a storable record |
//! | 4 | Immutable Authorship | `owner` and `created_at` never change after creation |
//!
//! ## Crate Structure
//!
//! - `domain/` - Pure domain logic (entities, codec, role checks, challenge)
//! - `ports/` - Port traits (inbound API, outbound ledger/signer/time)
//! - `storage/` - Catalog index and record store over the ledger port
//! - `adapters/` - In-memory ledger, test signers, fixed time source
//! - `service.rs` - Application service implementing the API
//!
//! ## Usage
//!
//! ```ignore
//! use willvault_core::{Address, ApprovingSigner, WillVaultApi, WillVaultService};
//!
//! let vault = WillVaultService::in_memory(ApprovingSigner::new());
//! let will = vault
//!     .create_will(owner, beneficiary, executor, 10.0, String::new())
//!     .await?;
//! vault.activate(&will.id, &owner).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;
pub mod storage;

// Re-export key types for convenience
pub use adapters::{ApprovingSigner, FixedTimeSource, InMemoryLedger, RejectingSigner};
pub use domain::{
    build_challenge, Address, ChallengeParams, CodecError, LedgerError, Signature, SignerError,
    StatusCounts, Will, WillId, WillParams, WillStatus, WillVaultError,
};
pub use ports::{Ledger, Signer, SystemTimeSource, TimeSource, WillVaultApi};
pub use service::WillVaultService;
pub use storage::{record_key, KeyIndex, WillStore, CATALOG_KEY};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
