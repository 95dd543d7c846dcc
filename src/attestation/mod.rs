// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Attestation model, normalization, validation and persistence.

pub mod normalize;
pub mod store;
pub mod types;
pub mod validate;

pub use normalize::{NormalizeError, ProofNormalizer, SdkNormalizer};
pub use store::{read_proof, write_proof, StoreError};
pub use types::{Attestation, Claim, ClaimParameters, ResponseMatch, ResponseRedaction, Witness};
pub use validate::{validate_attestation, ValidationError};
