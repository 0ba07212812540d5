//! # Ports
//!
//! Hexagonal boundary of the crate: the inbound API trait and the outbound
//! dependency traits.

pub mod inbound;
pub mod outbound;

pub use inbound::WillVaultApi;
pub use outbound::{Ledger, Signer, SystemTimeSource, TimeSource};
