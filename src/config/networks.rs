// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use ethers::types::Address;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A target network with its deployed verifier contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    pub verifier_address: Address,
    pub confirmation_blocks: u64,
}

impl NetworkConfig {
    pub fn base_sepolia() -> Self {
        NetworkConfig {
            name: "Base Sepolia".to_string(),
            chain_id: 84532,
            rpc_url: std::env::var("BASE_SEPOLIA_RPC_URL")
                .unwrap_or_else(|_| "https://sepolia.base.org".to_string()),
            verifier_address: Address::from_str("0x1bD0Eb3F8b7294cE13D9cFd7a2E2a5F2bC7c9E61")
                .expect("Invalid verifier address"),
            confirmation_blocks: 3,
        }
    }

    pub fn base_mainnet() -> Self {
        NetworkConfig {
            name: "Base Mainnet".to_string(),
            chain_id: 8453,
            rpc_url: std::env::var("BASE_MAINNET_RPC_URL")
                .unwrap_or_else(|_| "https://mainnet.base.org".to_string()),
            verifier_address: Address::from_str("0x7E49Fc7a5beb9D8B94cb5D9567c41E6b1aD0b8A4")
                .expect("Invalid verifier address"),
            confirmation_blocks: 3,
        }
    }

    /// Resolve a network by its CLI-facing name.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "testnet" => Some(Self::base_sepolia()),
            "mainnet" => Some(Self::base_mainnet()),
            _ => None,
        }
    }
}
