// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{NetworkConfig, RelayConfig};
use crate::prover::HttpProver;
use crate::requester::request_proof;
use crate::sources::{source_spec, SourceKind};
use crate::submitter::ProofSubmitter;

/// Arguments for the prove command
#[derive(Args, Debug)]
pub struct ProveArgs {
    /// Data source to attest (see `sources` for the list)
    #[arg(long)]
    pub source: String,

    /// Path the signed attestation is written to
    #[arg(long, default_value = "proof.json")]
    pub out: PathBuf,

    /// Attestation service endpoint (can also be set via PROVER_URL)
    #[arg(long, env = "PROVER_URL")]
    pub prover_url: Option<String>,
}

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path of a previously persisted attestation
    #[arg(long, default_value = "proof.json")]
    pub proof: PathBuf,

    /// Target network (testnet/mainnet)
    #[arg(long, default_value = "testnet")]
    pub network: String,

    /// Wallet seed phrase (can also be set via WALLET_MNEMONIC)
    #[arg(long, env = "WALLET_MNEMONIC")]
    pub mnemonic: Option<String>,

    /// Dry run mode - build and check the payload, submit nothing
    #[arg(long)]
    pub dry_run: bool,
}

/// Request an attestation and persist it
pub async fn prove(args: ProveArgs) -> Result<()> {
    let prover_url = args
        .prover_url
        .ok_or_else(|| anyhow!("Prover endpoint required. Use --prover-url or set PROVER_URL"))?;

    println!("🔏 Requesting attestation for '{}'...", args.source);

    let prover = HttpProver::new(prover_url);
    let attestation = request_proof(
        &prover,
        &args.source,
        &args.out,
        crate::config::DEFAULT_MAX_CLOCK_SKEW_SECS,
    )
    .await?;

    println!("✅ Attestation written to {}", args.out.display());
    println!("\n📋 Extracted values:");
    let mut entries: Vec<_> = attestation.extracted_parameter_values.iter().collect();
    entries.sort();
    for (label, value) in entries {
        println!("  {:<12} {}", label, value);
    }
    println!(
        "\n  Attested at epoch {} by {} witness(es)",
        attestation.claim.epoch,
        attestation.witnesses.len()
    );

    Ok(())
}

/// Submit a persisted attestation to the verifier contract
pub async fn verify(args: VerifyArgs) -> Result<()> {
    let network = NetworkConfig::named(&args.network)
        .ok_or_else(|| anyhow!("Unknown network '{}'. Use testnet or mainnet", args.network))?;

    if args.dry_run {
        // The dry-run path never derives a wallet, so no mnemonic is needed.
        let config = RelayConfig::new(network, String::new());
        let submitter = ProofSubmitter::new(config);
        let (attestation, payload) = submitter.prepare(&args.proof)?;

        println!("🔍 DRY RUN MODE - No transaction will be submitted");
        println!("\n📋 Verification payload:");
        println!("  message:     0x{}", hex::encode(payload.message));
        println!("  signature:   0x{}", hex::encode(payload.signature));
        println!("  recovery id: {}", payload.recovery_id);
        println!("  witness:     {}", attestation.witnesses[0].id);
        return Ok(());
    }

    let mnemonic = args
        .mnemonic
        .ok_or_else(|| anyhow!("Seed phrase required. Use --mnemonic or set WALLET_MNEMONIC"))?;

    println!("🚀 Verifying proof on {}...", network.name);

    let config = RelayConfig::new(network, mnemonic);
    let submitter = ProofSubmitter::new(config);
    let tx_hash = submitter.verify(&args.proof).await?;

    println!("✅ Verification transaction submitted");
    println!("  tx hash: {:?}", tx_hash);

    Ok(())
}

/// List the supported data sources
pub fn list_sources() -> Result<()> {
    println!("📚 Supported data sources:\n");
    for kind in SourceKind::ALL {
        let spec = source_spec(kind);
        println!("  {:<22} {} {}", kind.as_str(), spec.method, spec.url);
    }
    Ok(())
}
