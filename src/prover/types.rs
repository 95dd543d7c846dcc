// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Attestation service request/error types.

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::attestation::{ResponseMatch, ResponseRedaction};
use crate::sources::SourceSpec;

/// The fetch-and-extract job handed to the attestation service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProverRequest {
    pub url: String,
    pub method: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    pub response_matches: Vec<ResponseMatch>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub response_redactions: Vec<ResponseRedaction>,
}

impl ProverRequest {
    /// Build the request for a registered source.
    pub fn from_spec(spec: &SourceSpec) -> Self {
        ProverRequest {
            url: spec.url.to_string(),
            method: spec.method.to_string(),
            headers: spec
                .headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            response_matches: spec
                .response_matches
                .iter()
                .map(|pattern| ResponseMatch {
                    match_type: "regex".to_string(),
                    value: pattern.to_string(),
                })
                .collect(),
            response_redactions: spec
                .response_redactions
                .iter()
                .map(|r| ResponseRedaction {
                    json_path: r.json_path.map(str::to_string),
                    regex: r.regex.map(str::to_string),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProverError {
    #[error("attestation service returned status {status}: {message}")]
    ServiceError { status: u16, message: String },

    #[error("attestation service request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("attestation service unreachable: {0}")]
    Transport(String),

    #[error("attestation service response could not be used: {0}")]
    InvalidResponse(String),
}
