// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Attestation invariant checks.
//!
//! Structural rules the rest of the pipeline relies on. Run on both the
//! request path (reject a bad service response before persisting it)
//! and the verify path (reject a bad proof file before deriving a
//! wallet or touching the network).

use thiserror::Error;
use url::Url;

use super::types::Attestation;

/// Transport schemes an attested fetch may use.
const SUPPORTED_PROVIDERS: [&str; 2] = ["http", "https"];

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("attestation carries no signatures")]
    EmptySignatures,

    #[error("attestation carries no witnesses")]
    EmptyWitnesses,

    #[error("unsupported provider '{0}', expected one of http, https")]
    UnsupportedProvider(String),

    #[error("claim epoch must be a positive integer")]
    ZeroEpoch,

    #[error("claim timestamp must be a positive integer")]
    ZeroTimestamp,

    #[error("claim timestamp {timestamp} is more than {skew_secs}s ahead of now ({now})")]
    FutureTimestamp {
        timestamp: u64,
        now: u64,
        skew_secs: u64,
    },

    #[error("claim parameters are malformed: {0}")]
    BadParameters(String),
}

/// Check an attestation against the structural invariants.
///
/// `max_clock_skew_secs` is the allowed distance of `timestampS` into
/// the future; it is a policy constant carried by the caller's config,
/// not a protocol rule.
pub fn validate_attestation(
    attestation: &Attestation,
    max_clock_skew_secs: u64,
) -> Result<(), ValidationError> {
    if attestation.signatures.is_empty() {
        return Err(ValidationError::EmptySignatures);
    }
    if attestation.witnesses.is_empty() {
        return Err(ValidationError::EmptyWitnesses);
    }

    let claim = &attestation.claim;
    if !SUPPORTED_PROVIDERS.contains(&claim.provider.as_str()) {
        return Err(ValidationError::UnsupportedProvider(claim.provider.clone()));
    }
    if claim.epoch == 0 {
        return Err(ValidationError::ZeroEpoch);
    }
    if claim.timestamp_s == 0 {
        return Err(ValidationError::ZeroTimestamp);
    }

    let now = chrono::Utc::now().timestamp().max(0) as u64;
    if claim.timestamp_s > now + max_clock_skew_secs {
        return Err(ValidationError::FutureTimestamp {
            timestamp: claim.timestamp_s,
            now,
            skew_secs: max_clock_skew_secs,
        });
    }

    let params = claim
        .parsed_parameters()
        .map_err(|e| ValidationError::BadParameters(e.to_string()))?;
    if params.response_matches.is_empty() {
        return Err(ValidationError::BadParameters(
            "responseMatches is empty".to_string(),
        ));
    }
    Url::parse(&params.url)
        .map_err(|e| ValidationError::BadParameters(format!("url '{}': {}", params.url, e)))?;

    Ok(())
}
