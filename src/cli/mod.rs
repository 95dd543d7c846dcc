pub mod proving;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Fabstir Attest Node CLI
#[derive(Parser, Debug)]
#[command(name = "attest-node")]
#[command(version = "0.1.0")]
#[command(about = "Attest third-party web data and verify it on-chain", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Request an attestation for a data source and persist it
    Prove(proving::ProveArgs),

    /// Submit a persisted attestation to the on-chain verifier
    Verify(proving::VerifyArgs),

    /// List the supported data sources
    Sources,
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Prove(args) => proving::prove(args).await,
        Commands::Verify(args) => proving::verify(args).await,
        Commands::Sources => proving::list_sources(),
    }
}
