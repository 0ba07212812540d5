//! # Storage Layer
//!
//! Persistence of records and their catalog against the abstract ledger
//! port. The catalog (`will_keys`) and the per-record entries (`will_{id}`)
//! use a fixed JSON wire format for interoperability.

pub mod key_index;
pub mod record_store;

pub use key_index::{KeyIndex, CATALOG_KEY};
pub use record_store::{record_key, WillStore};
