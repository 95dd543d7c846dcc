// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! End-to-end tests for the claim adapter: canonicalization, hashing
//! and signature decomposition against known vectors, plus a full
//! sign-then-recover round trip with a real keypair.

use fabstir_attest_node::adapter::{
    extract_recovery_id, hash_message, prepare_verification_payload, recover_signer_address,
    serialize_claim, strip_recovery_byte,
};
use fabstir_attest_node::attestation::{Attestation, Claim, Witness};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use tiny_keccak::{Hasher, Keccak};

fn fixture_claim() -> Claim {
    Claim {
        identifier: "abc".to_string(),
        owner: "GXYZ".to_string(),
        timestamp_s: 1700000000,
        epoch: 2,
        provider: "https".to_string(),
        parameters: String::new(),
    }
}

/// Address of a verifying key, independent of the adapter's recovery path.
fn address_of(key: &SigningKey) -> String {
    let point = key.verifying_key().to_encoded_point(false);
    let mut hasher = Keccak::v256();
    let mut hash = [0u8; 32];
    hasher.update(&point.as_bytes()[1..]);
    hasher.finalize(&mut hash);
    format!("0x{}", hex::encode(&hash[12..]))
}

#[test]
fn serialized_claim_matches_fixture() {
    assert_eq!(
        serialize_claim(&fixture_claim()).unwrap(),
        "abc\nGXYZ\n1700000000\n2"
    );
}

#[test]
fn known_recovery_byte_vectors() {
    let body = "42".repeat(64);
    assert_eq!(extract_recovery_id(&format!("0x{}1b", body)).unwrap(), 0);
    assert_eq!(extract_recovery_id(&format!("0x{}1c", body)).unwrap(), 1);

    let stripped = strip_recovery_byte(&format!("0x{}1c", body)).unwrap();
    assert_eq!(hex::encode(stripped), body);
}

#[test]
fn digest_matches_independent_implementation() {
    let serialized = serialize_claim(&fixture_claim()).unwrap();
    let ours = hash_message(&serialized).unwrap();
    let theirs = ethers::utils::hash_message(&serialized);
    assert_eq!(ours, theirs.to_fixed_bytes());
}

#[test]
fn payload_recombines_to_the_signing_key() {
    // Deterministic test key; never used outside tests.
    let key = SigningKey::from_bytes(&[0x42u8; 32].into()).unwrap();
    let claim = fixture_claim();

    // Sign the claim the way the attestation service does.
    let digest = hash_message(&serialize_claim(&claim).unwrap()).unwrap();
    let (signature, recovery_id) = key.sign_prehash_recoverable(&digest).unwrap();
    let wire_signature = format!(
        "0x{}{:02x}",
        hex::encode(signature.to_bytes()),
        recovery_id.to_byte() + 27
    );

    let attestation = Attestation {
        claim,
        signatures: vec![wire_signature],
        extracted_parameter_values: Default::default(),
        witnesses: vec![Witness {
            id: address_of(&key),
            url: "wss://attester.example".to_string(),
        }],
    };

    let payload = prepare_verification_payload(&attestation).unwrap();
    assert_eq!(payload.message, digest);
    assert_eq!(payload.signature.to_vec(), signature.to_bytes().to_vec());
    assert_eq!(payload.recovery_id, recovery_id.to_byte() as u32);

    // The decomposed triple must recover exactly the attester address
    // the witness list names.
    let recovered = recover_signer_address(
        &payload.message,
        &payload.signature,
        payload.recovery_id as u8,
    )
    .unwrap();
    assert_eq!(recovered, address_of(&key));
}

#[test]
fn tampered_message_recovers_a_different_signer() {
    let key = SigningKey::from_bytes(&[0x42u8; 32].into()).unwrap();
    let digest = hash_message("abc\nGXYZ\n1700000000\n2").unwrap();
    let (signature, recovery_id) = key.sign_prehash_recoverable(&digest).unwrap();

    let mut rs = [0u8; 64];
    rs.copy_from_slice(&signature.to_bytes());

    let other_digest = hash_message("abc\nGXYZ\n1700000000\n3").unwrap();
    match recover_signer_address(&other_digest, &rs, recovery_id.to_byte()) {
        // Recovery either fails outright or yields a different address.
        Ok(address) => assert_ne!(address, address_of(&key)),
        Err(_) => {}
    }
}
