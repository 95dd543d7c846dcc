// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Claim Adapter error types.
//!
//! Every adapter failure is terminal: a wrong payload would either fail
//! verification on-chain (wasting the transaction fee) or validate
//! incorrectly, so there is no retry and no fallback path.

use thiserror::Error;

/// Errors produced by claim canonicalization, hashing and signature
/// decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// A required claim field is missing, empty or zero.
    #[error("malformed claim: field '{field}' is missing or empty")]
    MalformedClaim { field: &'static str },

    /// The message handed to the hasher is unusable.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The signature string cannot be decomposed into (r, s, recovery id).
    #[error("invalid signature: {reason}")]
    InvalidSignature { reason: String },
}

impl AdapterError {
    pub(crate) fn invalid_signature(reason: impl Into<String>) -> Self {
        AdapterError::InvalidSignature {
            reason: reason.into(),
        }
    }
}
