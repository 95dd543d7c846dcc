// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! External attestation service client.

pub mod http;
pub mod provider;
pub mod types;

pub use http::HttpProver;
pub use provider::AttestationProver;
pub use types::{ProverError, ProverRequest};
