// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Proof Requester orchestration tests with a mock attestation prover.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use fabstir_attest_node::prover::{AttestationProver, ProverError, ProverRequest};
use fabstir_attest_node::requester::{request_proof, RequestError};

/// Prover double that counts invocations and replays a canned response.
struct MockProver {
    response: Result<Value, ()>,
    calls: AtomicUsize,
}

impl MockProver {
    fn returning(response: Value) -> Self {
        Self {
            response: Ok(response),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            response: Err(()),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AttestationProver for MockProver {
    async fn attest(&self, _request: &ProverRequest) -> Result<Value, ProverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(value) => Ok(value.clone()),
            Err(()) => Err(ProverError::ServiceError {
                status: 502,
                message: "prover offline".to_string(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

fn fixture_response() -> Value {
    json!({
        "claim": {
            "identifier": "0x0a1b2c",
            "owner": "0x742d35cc6634c0532925a3b844bc9e7595f0beb0",
            "timestampS": chrono::Utc::now().timestamp(),
            "epoch": 1,
            "provider": "https",
            "parameters": "{\"method\":\"GET\",\"url\":\"https://api.coingecko.com/api/v3/simple/price?ids=ethereum&vs_currencies=usd\",\"responseMatches\":[{\"type\":\"regex\",\"value\":\"(?<price>[\\\\d.]+)\"}]}"
        },
        "signatures": [format!("0x{}1b", "ab".repeat(64))],
        "extractedParameterValues": {"price": "3841.02"},
        "witnesses": [{"id": "0x244897572368eadf65bfbc5aec98d8e5443a9072", "url": "wss://attester.example"}]
    })
}

#[tokio::test]
async fn unknown_source_never_calls_the_service() {
    let prover = MockProver::returning(fixture_response());
    let dir = tempfile::tempdir().unwrap();

    let err = request_proof(&prover, "stock-ticker", &dir.path().join("proof.json"), 300)
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::UnknownSourceKind(_)));
    assert!(err.to_string().contains("stock-ticker"));
    assert_eq!(prover.call_count(), 0);
}

#[tokio::test]
async fn missing_output_directory_never_calls_the_service() {
    let prover = MockProver::returning(fixture_response());

    let err = request_proof(
        &prover,
        "price-feed",
        Path::new("/definitely/not/a/dir/proof.json"),
        300,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RequestError::InvalidOutputPath { .. }));
    assert_eq!(prover.call_count(), 0);
}

#[tokio::test]
async fn successful_request_persists_the_raw_artifact() {
    let prover = MockProver::returning(fixture_response());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("proof.json");

    let attestation = request_proof(&prover, "price-feed", &path, 300)
        .await
        .unwrap();

    assert_eq!(prover.call_count(), 1);
    assert_eq!(attestation.extracted_parameter_values["price"], "3841.02");
    assert_eq!(attestation.claim.epoch, 1);

    // The file holds the service's raw response, byte-comparable after
    // a JSON round trip.
    let persisted: Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(persisted, fixture_response_with_timestamp(&persisted));
}

/// The fixture timestamp is taken at call time; align it before comparing.
fn fixture_response_with_timestamp(persisted: &Value) -> Value {
    let mut expected = fixture_response();
    expected["claim"]["timestampS"] = persisted["claim"]["timestampS"].clone();
    expected
}

#[tokio::test]
async fn service_failure_is_wrapped_with_source_context() {
    let prover = MockProver::failing();
    let dir = tempfile::tempdir().unwrap();

    let err = request_proof(&prover, "weather", &dir.path().join("proof.json"), 300)
        .await
        .unwrap_err();

    match err {
        RequestError::AttestationServiceFailure { kind, cause } => {
            assert_eq!(kind, "weather");
            assert!(cause.to_string().contains("502"));
        }
        other => panic!("expected AttestationServiceFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn invalid_service_response_is_a_service_failure() {
    // Response with an empty witness list breaks a structural invariant.
    let mut bad = fixture_response();
    bad["witnesses"] = json!([]);
    let prover = MockProver::returning(bad);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("proof.json");

    let err = request_proof(&prover, "price-feed", &path, 300)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RequestError::AttestationServiceFailure { .. }
    ));
    // Nothing is persisted for a rejected response.
    assert!(!path.exists());
}

#[tokio::test]
async fn existing_artifact_is_overwritten() {
    let prover = MockProver::returning(fixture_response());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("proof.json");
    std::fs::write(&path, "{\"stale\": true}").unwrap();

    request_proof(&prover, "price-feed", &path, 300)
        .await
        .unwrap();

    let persisted: Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(persisted.get("stale").is_none());
    assert!(persisted.get("claim").is_some());
}
