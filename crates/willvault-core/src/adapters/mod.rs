//! # Adapters
//!
//! Concrete implementations of the outbound ports: the in-memory ledger,
//! test signers, and a fixed time source.

pub mod memory_ledger;
pub mod signer;
pub mod time;

pub use memory_ledger::InMemoryLedger;
pub use signer::{ApprovingSigner, RejectingSigner};
pub use time::FixedTimeSource;
