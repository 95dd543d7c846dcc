// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Claim Adapter
//!
//! The deterministic transformation from a signed attestation into the
//! exact (message digest, signature body, recovery id) triple the
//! on-chain verifier consumes:
//!
//! - **Canonicalization**: rebuild the newline-joined claim string the
//!   attester originally signed ([`canonical::serialize_claim`])
//! - **Hashing**: wrap it in the personal-message convention and
//!   Keccak-256 it ([`canonical::hash_message`])
//! - **Decomposition**: split the 65-byte hex signature into its
//!   `r‖s` body and recovery id ([`signature`])
//!
//! All of it is pure, synchronous computation. It fails fast on the
//! first structural violation instead of producing a payload that would
//! silently fail on-chain.

pub mod canonical;
pub mod error;
pub mod signature;

pub use canonical::{hash_message, serialize_claim, SIGNED_MESSAGE_PREFIX};
pub use error::AdapterError;
pub use signature::{
    extract_recovery_id, recover_signer_address, strip_recovery_byte, RECOVERY_ID_OFFSET,
};

use crate::attestation::Attestation;

/// The three positional arguments of the verifier contract's entry
/// point, in the byte layout it expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationPayload {
    /// 32-byte personal-message digest of the serialized claim.
    pub message: [u8; 32],
    /// 64-byte `r‖s` signature body.
    pub signature: [u8; 64],
    /// Raw recovery id, widened to the contract's u32 argument type.
    pub recovery_id: u32,
}

/// Build the full verification payload from an attestation.
///
/// The first signature is authoritative; later entries belong to
/// additional witnesses and are not submitted.
///
/// # Errors
///
/// Propagates [`AdapterError`] from any stage; an attestation with no
/// signatures at all is rejected as an invalid signature.
pub fn prepare_verification_payload(
    attestation: &Attestation,
) -> Result<VerificationPayload, AdapterError> {
    let raw_signature = attestation
        .signatures
        .first()
        .ok_or_else(|| AdapterError::invalid_signature("attestation carries no signatures"))?;

    let serialized = serialize_claim(&attestation.claim)?;
    let message = hash_message(&serialized)?;
    let recovery_id = extract_recovery_id(raw_signature)?;
    let body = strip_recovery_byte(raw_signature)?;

    Ok(VerificationPayload {
        message,
        signature: body,
        recovery_id: recovery_id as u32,
    })
}
