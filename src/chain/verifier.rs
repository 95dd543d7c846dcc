// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! On-chain verifier contract client.
//!
//! Wraps the deployed verifier behind a small client that performs the
//! standard submission sequence: account sequence (nonce) lookup, fixed
//! base fee, gas estimation against the node (the prepare/simulate
//! step), sign, submit.

use anyhow::{anyhow, Context, Result};
use ethers::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

use crate::adapter::VerificationPayload;
use crate::config::NetworkConfig;

abigen!(
    ProofVerifier,
    r#"[
        {
            "inputs": [
                {"internalType": "bytes32", "name": "message", "type": "bytes32"},
                {"internalType": "bytes", "name": "signature", "type": "bytes"},
                {"internalType": "uint32", "name": "recoveryId", "type": "uint32"}
            ],
            "name": "verifyProof",
            "outputs": [{"internalType": "bool", "name": "", "type": "bool"}],
            "stateMutability": "nonpayable",
            "type": "function"
        },
        {
            "anonymous": false,
            "inputs": [
                {"indexed": true, "internalType": "bytes32", "name": "message", "type": "bytes32"},
                {"indexed": true, "internalType": "address", "name": "attester", "type": "address"}
            ],
            "name": "ProofAccepted",
            "type": "event"
        }
    ]"#
);

type VerifierMiddleware = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Connected client for one verifier deployment.
pub struct VerifierClient {
    provider: Provider<Http>,
    contract: ProofVerifier<VerifierMiddleware>,
    signer_address: Address,
    base_fee_wei: U256,
}

impl VerifierClient {
    /// Connect to the network and bind the verifier contract.
    ///
    /// Verifies that the RPC endpoint actually serves the configured
    /// chain before anything is signed against it.
    pub async fn connect(
        network: &NetworkConfig,
        wallet: LocalWallet,
        base_fee_wei: U256,
    ) -> Result<Self> {
        let provider = Provider::<Http>::try_from(&network.rpc_url)
            .map_err(|e| anyhow!("Failed to create provider: {}", e))?;

        let chain_id = provider
            .get_chainid()
            .await
            .map_err(|e| anyhow!("Failed to connect to RPC: {}", e))?;
        if chain_id.as_u64() != network.chain_id {
            return Err(anyhow!(
                "Chain ID mismatch: expected {}, got {}",
                network.chain_id,
                chain_id
            ));
        }

        let signer_address = wallet.address();
        let client = SignerMiddleware::new(provider.clone(), wallet);
        let contract = ProofVerifier::new(network.verifier_address, Arc::new(client));

        Ok(Self {
            provider,
            contract,
            signer_address,
            base_fee_wei,
        })
    }

    /// Submit a verification payload, returning the transaction hash.
    pub async fn submit(&self, payload: &VerificationPayload) -> Result<H256> {
        let nonce = self
            .provider
            .get_transaction_count(self.signer_address, None)
            .await
            .context("account sequence lookup failed")?;
        debug!(%nonce, "fetched account sequence");

        let mut call = self
            .contract
            .verify_proof(
                payload.message,
                Bytes::from(payload.signature.to_vec()),
                payload.recovery_id,
            )
            .gas_price(self.base_fee_wei);
        call.tx.set_nonce(nonce);

        // Prepare/simulate against the node before signing.
        let gas = call
            .estimate_gas()
            .await
            .context("transaction simulation failed")?;
        let call = call.gas(gas);

        let pending_tx = call
            .send()
            .await
            .context("transaction submission failed")?;
        let tx_hash = pending_tx.tx_hash();
        info!(?tx_hash, "verification transaction submitted");

        Ok(tx_hash)
    }

    /// Address of the submitting wallet.
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }
}
