// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Proof Requester
//!
//! Resolves a source through the Extraction Registry, hands the fetch
//! job to the external attestation prover, and persists the signed
//! result as the canonical on-disk artifact. Registry and output-path
//! preconditions are checked strictly before the service is called, so
//! a typo'd source name or missing directory never burns a proving
//! round-trip.

use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::attestation::{
    store, validate_attestation, Attestation, ProofNormalizer, SdkNormalizer, StoreError,
};
use crate::prover::{AttestationProver, ProverError, ProverRequest};
use crate::sources::{self, RegistryError};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    UnknownSourceKind(#[from] RegistryError),

    #[error("invalid output path '{path}': {reason}")]
    InvalidOutputPath { path: String, reason: String },

    #[error("attestation service failure for source '{kind}'")]
    AttestationServiceFailure {
        kind: &'static str,
        #[source]
        cause: ProverError,
    },

    #[error("failed to persist attestation to '{path}'")]
    PersistenceFailure {
        path: String,
        #[source]
        cause: StoreError,
    },
}

/// Request an attestation for `source` and persist it to `output_path`.
///
/// Returns the normalized attestation; the file holds the service's
/// raw response verbatim, overwriting any previous artifact at the
/// same path.
pub async fn request_proof(
    prover: &dyn AttestationProver,
    source: &str,
    output_path: &Path,
    max_clock_skew_secs: u64,
) -> Result<Attestation, RequestError> {
    let spec = sources::resolve(source)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(RequestError::InvalidOutputPath {
                path: output_path.display().to_string(),
                reason: "parent directory does not exist".to_string(),
            });
        }
    }

    let request = ProverRequest::from_spec(spec);
    info!(source = spec.kind.as_str(), url = spec.url, prover = prover.name(), "requesting attestation");

    let raw = prover
        .attest(&request)
        .await
        .map_err(|cause| RequestError::AttestationServiceFailure {
            kind: spec.kind.as_str(),
            cause,
        })?;

    // A response that can't be normalized or breaks the structural
    // invariants is a service failure, not a caller error.
    let attestation = SdkNormalizer.normalize(&raw).map_err(|e| {
        RequestError::AttestationServiceFailure {
            kind: spec.kind.as_str(),
            cause: ProverError::InvalidResponse(e.to_string()),
        }
    })?;
    validate_attestation(&attestation, max_clock_skew_secs).map_err(|e| {
        RequestError::AttestationServiceFailure {
            kind: spec.kind.as_str(),
            cause: ProverError::InvalidResponse(e.to_string()),
        }
    })?;

    store::write_proof(output_path, &raw).map_err(|cause| RequestError::PersistenceFailure {
        path: output_path.display().to_string(),
        cause,
    })?;
    info!(path = %output_path.display(), "attestation persisted");

    Ok(attestation)
}
