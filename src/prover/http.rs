// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP attestation prover.
//!
//! Talks to a zero-knowledge attestation service over its JSON API.
//! Proof generation on the service side takes tens of seconds, so the
//! request timeout is much longer than a plain fetch would need.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::provider::AttestationProver;
use super::types::{ProverError, ProverRequest};

const PROVER_TIMEOUT_SECS: u64 = 120;

/// Attestation prover backed by an HTTP attestation service.
pub struct HttpProver {
    endpoint: String,
    client: Client,
}

impl HttpProver {
    /// Create a prover client for the given service endpoint.
    pub fn new(endpoint: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROVER_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { endpoint, client }
    }
}

#[async_trait]
impl AttestationProver for HttpProver {
    async fn attest(&self, request: &ProverRequest) -> Result<Value, ProverError> {
        debug!(url = %request.url, "submitting attestation job");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProverError::Timeout {
                        timeout_ms: PROVER_TIMEOUT_SECS * 1000,
                    }
                } else {
                    ProverError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProverError::ServiceError {
                status: status.as_u16(),
                message,
            });
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|e| ProverError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        if !raw.is_object() {
            return Err(ProverError::InvalidResponse(
                "expected a JSON object".to_string(),
            ));
        }

        Ok(raw)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
