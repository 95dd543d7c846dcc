// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration.
//!
//! One immutable value constructed up front and passed into each
//! component. Network selection is a field of this value; nothing in
//! the submission path branches on a global.

pub mod networks;

pub use networks::NetworkConfig;

use ethers::types::U256;

/// Allowed distance of a claim timestamp into the future.
pub const DEFAULT_MAX_CLOCK_SKEW_SECS: u64 = 300;

/// Fixed gas price applied to verification transactions (1 gwei).
pub const DEFAULT_BASE_FEE_WEI: u64 = 1_000_000_000;

/// Everything the submitter workflow needs, assembled by the caller.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub network: NetworkConfig,
    /// Seed phrase for the submitting wallet; account index 0 is used.
    pub mnemonic: String,
    pub base_fee_wei: U256,
    pub max_clock_skew_secs: u64,
}

impl RelayConfig {
    pub fn new(network: NetworkConfig, mnemonic: String) -> Self {
        RelayConfig {
            network,
            mnemonic,
            base_fee_wei: U256::from(DEFAULT_BASE_FEE_WEI),
            max_clock_skew_secs: DEFAULT_MAX_CLOCK_SKEW_SECS,
        }
    }
}
