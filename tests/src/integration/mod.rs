//! # Integration Flows
//!
//! Cross-component tests running the full service stack against the
//! in-memory ledger adapter.

pub mod lifecycle;
pub mod resilience;
