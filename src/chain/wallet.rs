// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Deterministic wallet derivation.
//!
//! The submitting keypair is derived from a configured mnemonic at the
//! standard derivation path, account index 0. Key custody beyond this
//! derivation is out of scope.

use ethers::signers::{coins_bip39::English, LocalWallet, MnemonicBuilder, Signer};
use thiserror::Error;

/// Account index of the submitting wallet.
pub const ACCOUNT_INDEX: u32 = 0;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("HD wallet derivation rejected the mnemonic: {0}")]
    Derivation(String),
}

/// Derive the account-0 wallet from a mnemonic seed phrase.
pub fn derive_wallet(mnemonic: &str, chain_id: u64) -> Result<LocalWallet, WalletError> {
    let wallet = MnemonicBuilder::<English>::default()
        .phrase(mnemonic)
        .index(ACCOUNT_INDEX)
        .map_err(|e| WalletError::Derivation(e.to_string()))?
        .build()
        .map_err(|e| WalletError::Derivation(e.to_string()))?;

    Ok(wallet.with_chain_id(chain_id))
}
