//! # Access Control
//!
//! Role derivation relative to a record. Addresses are normalized at the
//! [`Address`] boundary, so every check here is plain equality.
//!
//! Beneficiary carries read-visibility only; no operation in this core
//! grants it a mutating capability.

use super::entities::Will;
use super::value_objects::Address;

/// Check whether the caller authored this will.
pub fn is_owner(will: &Will, caller: &Address) -> bool {
    will.owner == *caller
}

/// Check whether the caller is the designated executor.
pub fn is_executor(will: &Will, caller: &Address) -> bool {
    will.executor == *caller
}

/// Check whether the caller is the designated beneficiary.
pub fn is_beneficiary(will: &Will, caller: &Address) -> bool {
    will.beneficiary == *caller
}

/// Filter records to those the caller participates in as owner or executor.
///
/// This is the "my wills" view of an enumeration.
pub fn involving(wills: &[Will], caller: &Address) -> Vec<Will> {
    wills
        .iter()
        .filter(|w| is_owner(w, caller) || is_executor(w, caller))
        .cloned()
        .collect()
}
