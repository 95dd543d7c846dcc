// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Proof artifact persistence.
//!
//! One attestation per file, written once by the requester and read
//! back verbatim by the submitter. The file holds the service's raw
//! JSON, not the normalized form, so nothing is lost between the two
//! workflows. An existing file at the same path is overwritten without
//! merging.

use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("proof file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("proof file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persist a raw attestation to `path` as pretty-printed JSON.
pub fn write_proof(path: &Path, raw: &Value) -> Result<(), StoreError> {
    let body = serde_json::to_string_pretty(raw)?;
    fs::write(path, body)?;
    Ok(())
}

/// Load a raw attestation previously written by [`write_proof`].
pub fn read_proof(path: &Path) -> Result<Value, StoreError> {
    let body = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&body)?)
}
