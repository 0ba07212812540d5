//! # Domain Layer
//!
//! Pure domain logic: entities, value objects, the value codec, role
//! checks, the reveal challenge, and error types. Nothing here touches the
//! ledger or the signer.

pub mod access;
pub mod challenge;
pub mod codec;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use access::{involving, is_beneficiary, is_executor, is_owner};
pub use challenge::build_challenge;
pub use entities::{StatusCounts, Will, WillParams};
pub use errors::{CodecError, LedgerError, Signature, SignerError, WillVaultError};
pub use value_objects::{Address, ChallengeParams, WillId, WillStatus};
