// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Attestation prover trait.

use async_trait::async_trait;
use serde_json::Value;

use super::types::{ProverError, ProverRequest};

/// External prover that fetches a resource over attested TLS and signs
/// what the extraction patterns captured.
///
/// Returns the service's raw JSON so the persisted artifact keeps
/// whatever shape the service natively produces; normalization happens
/// downstream.
#[async_trait]
pub trait AttestationProver: Send + Sync {
    async fn attest(&self, request: &ProverRequest) -> Result<Value, ProverError>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}
