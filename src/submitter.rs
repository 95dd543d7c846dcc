// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Transaction Submitter
//!
//! Loads a persisted attestation, reshapes it through the Claim
//! Adapter, and submits the resulting (digest, signature, recovery id)
//! triple to the on-chain verifier. Structural checks run strictly
//! before wallet derivation or any network round-trip; adapter errors
//! are terminal with no retry, because a wrong payload either wastes
//! the transaction fee or, worse, validates incorrectly.

use ethers::types::H256;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::adapter::{self, AdapterError, VerificationPayload};
use crate::attestation::{
    store, validate_attestation, Attestation, ProofNormalizer, SdkNormalizer, StoreError,
};
use crate::chain::{self, VerifierClient, WalletError};
use crate::config::RelayConfig;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("proof file not found at '{path}'")]
    ProofNotFound { path: String },

    #[error("malformed proof file: {reason}")]
    MalformedProofFile { reason: String },

    #[error("wallet derivation failed")]
    WalletDerivationFailure(#[source] WalletError),

    #[error("claim adapter rejected the attestation")]
    AdapterFailure(#[from] AdapterError),

    #[error("attester mismatch: witness is {expected} but the signature recovers to {recovered}")]
    WitnessMismatch { expected: String, recovered: String },

    #[error("transaction submission failed")]
    SubmissionFailure(#[source] anyhow::Error),
}

/// Submits persisted attestations to the configured verifier contract.
pub struct ProofSubmitter<N: ProofNormalizer = SdkNormalizer> {
    config: RelayConfig,
    normalizer: N,
}

impl ProofSubmitter<SdkNormalizer> {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            normalizer: SdkNormalizer,
        }
    }
}

impl<N: ProofNormalizer> ProofSubmitter<N> {
    pub fn with_normalizer(config: RelayConfig, normalizer: N) -> Self {
        Self { config, normalizer }
    }

    /// Load a proof file and build its verification payload without
    /// touching wallet or network. Backs the dry-run mode and the
    /// first half of [`verify`](Self::verify).
    pub fn prepare(
        &self,
        proof_path: &Path,
    ) -> Result<(Attestation, VerificationPayload), SubmitError> {
        let raw = store::read_proof(proof_path).map_err(|e| match e {
            StoreError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                SubmitError::ProofNotFound {
                    path: proof_path.display().to_string(),
                }
            }
            other => SubmitError::MalformedProofFile {
                reason: other.to_string(),
            },
        })?;

        // Cheapest structural gate first: no signatures, no payload.
        let signatures = raw
            .get("signatures")
            .and_then(|v| v.as_array())
            .ok_or_else(|| SubmitError::MalformedProofFile {
                reason: "missing signatures array".to_string(),
            })?;
        if signatures.is_empty() {
            return Err(SubmitError::MalformedProofFile {
                reason: "empty signatures array".to_string(),
            });
        }

        let attestation = self.normalizer.normalize(&raw).map_err(|e| {
            SubmitError::MalformedProofFile {
                reason: e.to_string(),
            }
        })?;
        validate_attestation(&attestation, self.config.max_clock_skew_secs).map_err(|e| {
            SubmitError::MalformedProofFile {
                reason: e.to_string(),
            }
        })?;

        let payload = adapter::prepare_verification_payload(&attestation)?;
        debug!(
            message = %hex::encode(payload.message),
            recovery_id = payload.recovery_id,
            "verification payload prepared"
        );

        // Local pre-check: the signature must recover to the witness
        // that co-signed the attestation, or the contract will reject
        // it and the fee is lost.
        let recovered = adapter::recover_signer_address(
            &payload.message,
            &payload.signature,
            payload.recovery_id as u8,
        )?;
        if let Some(witness) = attestation.witnesses.first() {
            if !witness.id.eq_ignore_ascii_case(&recovered) {
                return Err(SubmitError::WitnessMismatch {
                    expected: witness.id.clone(),
                    recovered,
                });
            }
        }

        Ok((attestation, payload))
    }

    /// Verify a persisted proof on-chain, returning the transaction
    /// hash.
    pub async fn verify(&self, proof_path: &Path) -> Result<H256, SubmitError> {
        let (attestation, payload) = self.prepare(proof_path)?;
        info!(
            identifier = %attestation.claim.identifier,
            epoch = attestation.claim.epoch,
            network = %self.config.network.name,
            "submitting proof for on-chain verification"
        );

        let wallet = chain::derive_wallet(&self.config.mnemonic, self.config.network.chain_id)
            .map_err(SubmitError::WalletDerivationFailure)?;

        let client = VerifierClient::connect(
            &self.config.network,
            wallet,
            self.config.base_fee_wei,
        )
        .await
        .map_err(SubmitError::SubmissionFailure)?;

        client
            .submit(&payload)
            .await
            .map_err(SubmitError::SubmissionFailure)
    }
}
