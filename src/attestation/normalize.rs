// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Proof normalization.
//!
//! The attestation service's SDK emits slightly different shapes
//! depending on the call path (`claim` vs `claimData`, signatures with
//! or without a `0x` marker, mixed-case witness addresses). The
//! [`ProofNormalizer`] seam turns whatever the service produced into
//! the one canonical [`Attestation`] the Claim Adapter accepts, so the
//! adapter never depends on the collaborator's internal shape.

use serde_json::Value;
use thiserror::Error;

use super::types::{Attestation, Claim, Witness};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("attestation is not a JSON object")]
    NotAnObject,

    #[error("attestation is missing a claim object")]
    MissingClaim,

    #[error("attestation field '{field}' has an unexpected shape: {reason}")]
    BadField { field: &'static str, reason: String },
}

/// Transform a raw attestation-service response into the canonical
/// on-chain-ready form.
pub trait ProofNormalizer: Send + Sync {
    fn normalize(&self, raw: &Value) -> Result<Attestation, NormalizeError>;
}

/// Default normalizer matching the attestation SDK's output.
///
/// - accepts the claim under either `claim` or `claimData`
/// - guarantees every signature carries the `0x` marker, lowercased
/// - lowercases witness addresses for case-insensitive comparison
#[derive(Debug, Default, Clone, Copy)]
pub struct SdkNormalizer;

impl ProofNormalizer for SdkNormalizer {
    fn normalize(&self, raw: &Value) -> Result<Attestation, NormalizeError> {
        let obj = raw.as_object().ok_or(NormalizeError::NotAnObject)?;

        let claim_value = obj
            .get("claim")
            .or_else(|| obj.get("claimData"))
            .ok_or(NormalizeError::MissingClaim)?;
        let claim: Claim =
            serde_json::from_value(claim_value.clone()).map_err(|e| NormalizeError::BadField {
                field: "claim",
                reason: e.to_string(),
            })?;

        let signatures = match obj.get("signatures") {
            Some(value) => {
                let raw_signatures: Vec<String> = serde_json::from_value(value.clone())
                    .map_err(|e| NormalizeError::BadField {
                        field: "signatures",
                        reason: e.to_string(),
                    })?;
                raw_signatures.iter().map(|s| canonical_hex(s)).collect()
            }
            None => Vec::new(),
        };

        let extracted_parameter_values = match obj.get("extractedParameterValues") {
            Some(value) => {
                serde_json::from_value(value.clone()).map_err(|e| NormalizeError::BadField {
                    field: "extractedParameterValues",
                    reason: e.to_string(),
                })?
            }
            None => Default::default(),
        };

        let witnesses = match obj.get("witnesses") {
            Some(value) => {
                let raw_witnesses: Vec<Witness> = serde_json::from_value(value.clone())
                    .map_err(|e| NormalizeError::BadField {
                        field: "witnesses",
                        reason: e.to_string(),
                    })?;
                raw_witnesses
                    .into_iter()
                    .map(|w| Witness {
                        id: canonical_hex(&w.id),
                        url: w.url,
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        Ok(Attestation {
            claim,
            signatures,
            extracted_parameter_values,
            witnesses,
        })
    }
}

/// Lowercase a hex string and ensure it carries the `0x` marker.
fn canonical_hex(s: &str) -> String {
    let lower = s.to_ascii_lowercase();
    if lower.starts_with("0x") {
        lower
    } else {
        format!("0x{}", lower)
    }
}
