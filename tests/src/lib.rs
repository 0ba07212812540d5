//! # WillVault Test Suite
//!
//! Unified test crate containing cross-component integration flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── lifecycle.rs    # create → activate → execute flows and guards
//!     ├── concurrency.rs  # concurrent creates against the CAS catalog
//!     └── resilience.rs   # corrupt entries, legacy data, unavailable ledger
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p willvault-tests
//! cargo test -p willvault-tests integration::lifecycle
//! ```

pub mod integration;
