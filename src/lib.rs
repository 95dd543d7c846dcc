// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod adapter;
pub mod attestation;
pub mod chain;
pub mod cli;
pub mod config;
pub mod prover;
pub mod requester;
pub mod sources;
pub mod submitter;
pub mod version;

// Re-export main types
pub use adapter::{
    hash_message, prepare_verification_payload, serialize_claim, AdapterError, VerificationPayload,
};
pub use attestation::{Attestation, Claim, ProofNormalizer, SdkNormalizer, Witness};
pub use config::{NetworkConfig, RelayConfig};
pub use prover::{AttestationProver, HttpProver, ProverError, ProverRequest};
pub use requester::{request_proof, RequestError};
pub use sources::{resolve, source_spec, RegistryError, SourceKind, SourceSpec};
pub use submitter::{ProofSubmitter, SubmitError};
