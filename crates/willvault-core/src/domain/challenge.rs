//! # Reveal Challenge
//!
//! Deterministic challenge text a caller must get signed before a value is
//! revealed. The template is fixed: five newline-separated `key:value`
//! lines, in this exact order, for interoperability with existing signers.
//!
//! The challenge is a UX speed-bump, not cryptographic access control; the
//! signature produced over it is never inspected by the core.

use super::value_objects::ChallengeParams;

/// Build the challenge message for a reveal session.
pub fn build_challenge(params: &ChallengeParams) -> String {
    format!(
        "publickey:{}\ncontractAddresses:{}\ncontractsChainId:{}\nstartTimestamp:{}\ndurationDays:{}",
        params.public_key,
        params.contract_address,
        params.chain_id,
        params.start_timestamp,
        params.duration_days
    )
}
