// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Signature Decomposition
//!
//! Splits the attestation's hex-encoded 65-byte signature into the
//! 64-byte `r‖s` body and the numeric recovery id the verifier contract
//! consumes.
//!
//! The signature is expected in its canonical persisted form: a `0x`
//! marker followed by 130 hex characters (32-byte `r`, 32-byte `s`, one
//! recovery byte). The recovery byte stores `27 + id`; ids outside
//! [0,3] after subtracting 27 are rejected rather than adjusted for a
//! chain-id offset.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use tiny_keccak::{Hasher, Keccak};

use super::error::AdapterError;

/// Offset added to the raw recovery id in the trailing signature byte.
pub const RECOVERY_ID_OFFSET: u8 = 27;

/// Minimum hex length for a decomposable signature: `0x` marker,
/// 128-character `r‖s` body, 2-character recovery byte.
const MIN_SIGNATURE_HEX_LEN: usize = 130;

/// Read the recovery id from the last byte of a hex signature.
///
/// # Errors
///
/// Returns [`AdapterError::InvalidSignature`] if the input has fewer
/// than 2 hex characters, the trailing byte is not hex, or the value
/// after subtracting the 27 offset falls outside [0,3].
pub fn extract_recovery_id(signature: &str) -> Result<u8, AdapterError> {
    if !signature.is_ascii() || signature.len() < 2 {
        return Err(AdapterError::invalid_signature(format!(
            "too short to carry a recovery byte ({} chars)",
            signature.len()
        )));
    }

    let tail = &signature[signature.len() - 2..];
    let byte = u8::from_str_radix(tail, 16).map_err(|e| {
        AdapterError::invalid_signature(format!("recovery byte '{}' is not hex: {}", tail, e))
    })?;

    let id = byte.checked_sub(RECOVERY_ID_OFFSET).ok_or_else(|| {
        AdapterError::invalid_signature(format!(
            "recovery byte 0x{:02x} is below the {} offset",
            byte, RECOVERY_ID_OFFSET
        ))
    })?;
    if id > 3 {
        return Err(AdapterError::invalid_signature(format!(
            "recovery id {} out of range [0,3]",
            id
        )));
    }

    Ok(id)
}

/// Drop the leading `0x` marker and the trailing recovery byte,
/// returning the 64-byte `r‖s` signature body.
///
/// # Errors
///
/// Returns [`AdapterError::InvalidSignature`] if the input is shorter
/// than 130 hex characters or the body is not valid hex.
pub fn strip_recovery_byte(signature: &str) -> Result<[u8; 64], AdapterError> {
    if !signature.is_ascii() || signature.len() < MIN_SIGNATURE_HEX_LEN {
        return Err(AdapterError::invalid_signature(format!(
            "expected at least {} hex chars, got {}",
            MIN_SIGNATURE_HEX_LEN,
            signature.len()
        )));
    }

    let body = &signature[2..130];
    let bytes = hex::decode(body).map_err(|e| {
        AdapterError::invalid_signature(format!("signature body is not hex: {}", e))
    })?;

    let mut out = [0u8; 64];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Recover the attester address from a decomposed signature.
///
/// Used as a local pre-check before submission: the recovered address
/// must match the first witness, otherwise the transaction fee would be
/// wasted on a signature the contract will reject.
///
/// # Arguments
///
/// * `message` - 32-byte digest from [`super::canonical::hash_message`]
/// * `signature` - 64-byte `r‖s` body
/// * `recovery_id` - raw recovery id in [0,3]
///
/// # Returns
///
/// The signer's address as a 0x-prefixed lowercase hex string.
pub fn recover_signer_address(
    message: &[u8; 32],
    signature: &[u8; 64],
    recovery_id: u8,
) -> Result<String, AdapterError> {
    let recovery_id = RecoveryId::try_from(recovery_id).map_err(|e| {
        AdapterError::invalid_signature(format!("recovery id rejected by curve: {}", e))
    })?;

    let signature = Signature::try_from(&signature[..])
        .map_err(|e| AdapterError::invalid_signature(format!("r‖s body rejected: {}", e)))?;

    let verifying_key = VerifyingKey::recover_from_prehash(message, &signature, recovery_id)
        .map_err(|e| {
            AdapterError::invalid_signature(format!("public key recovery failed: {}", e))
        })?;

    // Address = last 20 bytes of keccak256 over the uncompressed public
    // key without its 0x04 prefix byte.
    let public_key = verifying_key.to_encoded_point(false);
    let mut hasher = Keccak::v256();
    let mut hash = [0u8; 32];
    hasher.update(&public_key.as_bytes()[1..]);
    hasher.finalize(&mut hash);

    Ok(format!("0x{}", hex::encode(&hash[12..])))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig_with_tail(tail: &str) -> String {
        format!("0x{}{}", "11".repeat(64), tail)
    }

    #[test]
    fn test_extract_recovery_id_offset() {
        assert_eq!(extract_recovery_id(&sig_with_tail("1b")).unwrap(), 0);
        assert_eq!(extract_recovery_id(&sig_with_tail("1c")).unwrap(), 1);
        assert_eq!(extract_recovery_id(&sig_with_tail("1d")).unwrap(), 2);
        assert_eq!(extract_recovery_id(&sig_with_tail("1e")).unwrap(), 3);
    }

    #[test]
    fn test_extract_recovery_id_reads_last_byte_only() {
        assert_eq!(extract_recovery_id("1c").unwrap(), 1);
    }

    #[test]
    fn test_extract_recovery_id_rejects_short_input() {
        assert!(matches!(
            extract_recovery_id("a"),
            Err(AdapterError::InvalidSignature { .. })
        ));
        assert!(matches!(
            extract_recovery_id(""),
            Err(AdapterError::InvalidSignature { .. })
        ));
    }

    #[test]
    fn test_extract_recovery_id_rejects_out_of_range() {
        // Below the offset.
        assert!(extract_recovery_id(&sig_with_tail("00")).is_err());
        assert!(extract_recovery_id(&sig_with_tail("1a")).is_err());
        // Above the offset window; a chain-id adjusted byte is not guessed at.
        assert!(extract_recovery_id(&sig_with_tail("1f")).is_err());
        assert!(extract_recovery_id(&sig_with_tail("25")).is_err());
    }

    #[test]
    fn test_strip_recovery_byte_returns_64_bytes() {
        let body = strip_recovery_byte(&sig_with_tail("1b")).unwrap();
        assert_eq!(body, [0x11u8; 64]);
    }

    #[test]
    fn test_strip_recovery_byte_rejects_short_input() {
        let short = format!("0x{}", "22".repeat(63));
        assert!(matches!(
            strip_recovery_byte(&short),
            Err(AdapterError::InvalidSignature { .. })
        ));
    }

    #[test]
    fn test_strip_recovery_byte_rejects_non_hex_body() {
        let bad = format!("0xzz{}1b", "33".repeat(63));
        assert!(strip_recovery_byte(&bad).is_err());
    }
}
