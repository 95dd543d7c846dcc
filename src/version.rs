// Version information for the Fabstir Attest Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-onchain-verify-2025-08-01";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-01";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "base-sepolia",
    "base-mainnet",
    "attested-fetch",
    "onchain-verify",
    "dry-run",
];
