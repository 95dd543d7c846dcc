// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Attestation wire model.
//!
//! Field names mirror the attestation service's native camelCase JSON
//! so a persisted proof file round-trips without renaming. Claim fields
//! default to empty/zero on deserialization; the adapter and validator
//! are the layers that decide whether an absent field is fatal.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A signed attestation that specific values were extracted from a
/// specific network resource at a specific time.
///
/// Immutable once loaded: downstream components derive new values
/// (digest, decomposed signature) without mutating the original.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attestation {
    pub claim: Claim,
    /// Hex signature strings; index 0 is authoritative on-chain.
    #[serde(default)]
    pub signatures: Vec<String>,
    /// Sparse capture-group label → extracted value mapping. Keys are
    /// absent when an optional repetition group did not match.
    #[serde(default)]
    pub extracted_parameter_values: HashMap<String, String>,
    /// Attester identities; index 0 corresponds to `signatures[0]`.
    #[serde(default)]
    pub witnesses: Vec<Witness>,
}

/// The core signed fields of an attestation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Claim {
    /// Opaque content-derived token.
    pub identifier: String,
    /// Address-like string identifying the attester's claimed identity.
    pub owner: String,
    /// Seconds since epoch at attestation time.
    pub timestamp_s: u64,
    /// Signing epoch of the attestation service.
    pub epoch: u64,
    /// Transport scheme of the attested fetch (`http` or `https`).
    pub provider: String,
    /// Serialized request sub-object (method, url, responseMatches).
    pub parameters: String,
}

impl Claim {
    /// Parse the embedded `parameters` string into its typed form.
    pub fn parsed_parameters(&self) -> Result<ClaimParameters, serde_json::Error> {
        serde_json::from_str(&self.parameters)
    }
}

/// An identity that co-signed the attestation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Witness {
    /// Hex address of the attester's signing key.
    pub id: String,
    /// Network endpoint the attester is reachable at.
    pub url: String,
}

/// The request description embedded in [`Claim::parameters`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimParameters {
    pub method: String,
    pub url: String,
    pub response_matches: Vec<ResponseMatch>,
    #[serde(default)]
    pub response_redactions: Vec<ResponseRedaction>,
}

/// One extraction pattern applied to the fetched content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMatch {
    #[serde(rename = "type")]
    pub match_type: String,
    pub value: String,
}

/// A portion of the transcript hidden from the attestation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRedaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_wire_names_are_camel_case() {
        let claim = Claim {
            identifier: "0x01".to_string(),
            owner: "0x02".to_string(),
            timestamp_s: 1700000000,
            epoch: 1,
            provider: "https".to_string(),
            parameters: "{}".to_string(),
        };
        let json = serde_json::to_value(&claim).unwrap();
        assert_eq!(json["timestampS"], 1700000000);
        assert!(json.get("timestamp_s").is_none());
    }

    #[test]
    fn test_claim_missing_fields_default() {
        let claim: Claim = serde_json::from_str(r#"{"identifier":"0x01"}"#).unwrap();
        assert_eq!(claim.identifier, "0x01");
        assert!(claim.owner.is_empty());
        assert_eq!(claim.timestamp_s, 0);
        assert_eq!(claim.epoch, 0);
    }

    #[test]
    fn test_parsed_parameters_requires_core_fields() {
        let mut claim = Claim::default();
        claim.parameters =
            r#"{"method":"GET","url":"https://example.com","responseMatches":[{"type":"regex","value":"(?<v>\\d+)"}]}"#
                .to_string();
        let params = claim.parsed_parameters().unwrap();
        assert_eq!(params.method, "GET");
        assert_eq!(params.response_matches.len(), 1);

        claim.parameters = r#"{"method":"GET"}"#.to_string();
        assert!(claim.parsed_parameters().is_err());
    }

    #[test]
    fn test_attestation_extracted_values_are_sparse() {
        let json = r#"{
            "claim": {"identifier":"0x01","owner":"0x02","timestampS":1700000000,"epoch":1},
            "signatures": ["0xdead"],
            "extractedParameterValues": {"price": "3841.02"},
            "witnesses": [{"id":"0xbeef","url":"wss://attester.example"}]
        }"#;
        let att: Attestation = serde_json::from_str(json).unwrap();
        assert_eq!(att.extracted_parameter_values["price"], "3841.02");
        assert!(att.extracted_parameter_values.get("rank1").is_none());
        assert_eq!(att.witnesses[0].id, "0xbeef");
    }
}
