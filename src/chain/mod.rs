// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Wallet derivation and verifier contract access.

pub mod verifier;
pub mod wallet;

pub use verifier::{ProofVerifier, VerifierClient};
pub use wallet::{derive_wallet, WalletError, ACCOUNT_INDEX};
