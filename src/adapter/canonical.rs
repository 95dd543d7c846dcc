// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Claim Canonicalization and Hashing
//!
//! Reconstructs the exact byte message the attestation service signed
//! and computes the digest the verifier contract checks against.
//!
//! ## Message Formula
//!
//! ```text
//! 1. serialized = identifier + "\n" + owner + "\n" + timestampS + "\n" + epoch
//! 2. digest     = keccak256("\x19Ethereum Signed Message:\n" + len(serialized) + serialized)
//! ```
//!
//! Both steps must be bit-exact. Any deviation in field order, the
//! prefix, or the decimal length encoding yields a digest that will
//! never validate against the attester's signature.

use tiny_keccak::{Hasher, Keccak};

use super::error::AdapterError;
use crate::attestation::Claim;

/// Prefix of the personal-message signing convention used by the
/// attestation service (EIP-191).
pub const SIGNED_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Serialize the four signed claim fields into their canonical form.
///
/// Fields are joined with a single `\n` in the fixed order
/// `identifier`, `owner`, `timestampS`, `epoch`; integers are rendered
/// as base-10 ASCII and no trailing newline is appended.
///
/// # Errors
///
/// Returns [`AdapterError::MalformedClaim`] naming the first field that
/// is missing (empty string) or zero.
pub fn serialize_claim(claim: &Claim) -> Result<String, AdapterError> {
    if claim.identifier.is_empty() {
        return Err(AdapterError::MalformedClaim {
            field: "identifier",
        });
    }
    if claim.owner.is_empty() {
        return Err(AdapterError::MalformedClaim { field: "owner" });
    }
    if claim.timestamp_s == 0 {
        return Err(AdapterError::MalformedClaim {
            field: "timestampS",
        });
    }
    if claim.epoch == 0 {
        return Err(AdapterError::MalformedClaim { field: "epoch" });
    }

    Ok(format!(
        "{}\n{}\n{}\n{}",
        claim.identifier, claim.owner, claim.timestamp_s, claim.epoch
    ))
}

/// Hash a serialized claim under the personal-message convention.
///
/// The digest is `keccak256(prefix || decimal byte length || message)`,
/// which is what the verifier contract expects as its `message`
/// argument — not the serialized claim itself.
///
/// # Errors
///
/// Returns [`AdapterError::InvalidInput`] if the message is empty.
pub fn hash_message(message: &str) -> Result<[u8; 32], AdapterError> {
    if message.is_empty() {
        return Err(AdapterError::InvalidInput {
            reason: "message is empty".to_string(),
        });
    }

    let mut hasher = Keccak::v256();
    let mut digest = [0u8; 32];
    hasher.update(SIGNED_MESSAGE_PREFIX.as_bytes());
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message.as_bytes());
    hasher.finalize(&mut digest);

    Ok(digest)
}
