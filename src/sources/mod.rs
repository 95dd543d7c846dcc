// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Extraction Registry
//!
//! Maps each supported data-source identifier to the fixed request the
//! attestation service performs on its behalf: target URL, HTTP
//! method, headers, extraction patterns and redactions. Patterns are
//! opaque text with named capture groups; the external service applies
//! them, this registry only stores them.
//!
//! Patterns that capture repeated records (e.g. the top-5 rankings)
//! make every repetition after the first optional, so a response with
//! fewer records than the maximum still attests cleanly.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown source kind '{supplied}', valid choices: {valid}")]
    UnknownSourceKind { supplied: String, valid: String },
}

/// Closed enumeration of attestable data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    PriceFeed,
    EconomicIndicators,
    Rankings,
    Weather,
    LiveScores,
}

impl SourceKind {
    pub const ALL: [SourceKind; 5] = [
        SourceKind::PriceFeed,
        SourceKind::EconomicIndicators,
        SourceKind::Rankings,
        SourceKind::Weather,
        SourceKind::LiveScores,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::PriceFeed => "price-feed",
            SourceKind::EconomicIndicators => "economic-indicators",
            SourceKind::Rankings => "rankings",
            SourceKind::Weather => "weather",
            SourceKind::LiveScores => "live-scores",
        }
    }

    /// Parse a CLI-supplied identifier.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownSourceKind`] naming the bad identifier
    /// and listing every valid choice.
    pub fn parse(name: &str) -> Result<Self, RegistryError> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| RegistryError::UnknownSourceKind {
                supplied: name.to_string(),
                valid: Self::ALL
                    .iter()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A redaction applied to the fetched response before attestation.
#[derive(Debug, Clone, Copy)]
pub struct RedactionSpec {
    pub json_path: Option<&'static str>,
    pub regex: Option<&'static str>,
}

/// The fixed request + extraction tuple for one source.
#[derive(Debug, Clone, Copy)]
pub struct SourceSpec {
    pub kind: SourceKind,
    pub url: &'static str,
    pub method: &'static str,
    pub headers: &'static [(&'static str, &'static str)],
    /// Regex pattern bodies with named capture groups.
    pub response_matches: &'static [&'static str],
    pub response_redactions: &'static [RedactionSpec],
}

const PRICE_FEED: SourceSpec = SourceSpec {
    kind: SourceKind::PriceFeed,
    url: "https://api.coingecko.com/api/v3/simple/price?ids=ethereum&vs_currencies=usd",
    method: "GET",
    headers: &[("accept", "application/json")],
    response_matches: &[r#""ethereum":\{"usd":(?<price>[\d.]+)\}"#],
    response_redactions: &[],
};

const ECONOMIC_INDICATORS: SourceSpec = SourceSpec {
    kind: SourceKind::EconomicIndicators,
    url: "https://api.worldbank.org/v2/country/US/indicator/FP.CPI.TOTL.ZG?format=json&mrnev=1",
    method: "GET",
    headers: &[("accept", "application/json")],
    response_matches: &[r#""date":"(?<year>\d{4})","value":(?<inflation>[\d.]+)"#],
    response_redactions: &[],
};

// Up to five rank/name/worth records per fetch; records 2-5 optional.
const RANKINGS: SourceSpec = SourceSpec {
    kind: SourceKind::Rankings,
    url: "https://www.forbes.com/forbesapi/person/rtb/0/position/true.json?fields=rank,personName,finalWorth&limit=5",
    method: "GET",
    headers: &[
        ("accept", "application/json"),
        ("user-agent", "Mozilla/5.0 (compatible; attest-node)"),
    ],
    response_matches: &[concat!(
        r#""rank":(?<rank1>\d+)[\s\S]*?"personName":"(?<name1>[^"]+)"[\s\S]*?"finalWorth":(?<worth1>[\d.]+)"#,
        r#"(?:[\s\S]*?"rank":(?<rank2>\d+)[\s\S]*?"personName":"(?<name2>[^"]+)"[\s\S]*?"finalWorth":(?<worth2>[\d.]+))?"#,
        r#"(?:[\s\S]*?"rank":(?<rank3>\d+)[\s\S]*?"personName":"(?<name3>[^"]+)"[\s\S]*?"finalWorth":(?<worth3>[\d.]+))?"#,
        r#"(?:[\s\S]*?"rank":(?<rank4>\d+)[\s\S]*?"personName":"(?<name4>[^"]+)"[\s\S]*?"finalWorth":(?<worth4>[\d.]+))?"#,
        r#"(?:[\s\S]*?"rank":(?<rank5>\d+)[\s\S]*?"personName":"(?<name5>[^"]+)"[\s\S]*?"finalWorth":(?<worth5>[\d.]+))?"#,
    )],
    response_redactions: &[RedactionSpec {
        json_path: Some("$.personList.personsLists"),
        regex: None,
    }],
};

const WEATHER: SourceSpec = SourceSpec {
    kind: SourceKind::Weather,
    url: "https://api.open-meteo.com/v1/forecast?latitude=52.52&longitude=13.41&current_weather=true",
    method: "GET",
    headers: &[("accept", "application/json")],
    response_matches: &[
        r#""temperature":(?<temperature>-?[\d.]+)[\s\S]*?"windspeed":(?<windspeed>[\d.]+)"#,
    ],
    response_redactions: &[],
};

// Up to three fixtures per fetch; fixtures 2-3 optional.
const LIVE_SCORES: SourceSpec = SourceSpec {
    kind: SourceKind::LiveScores,
    url: "https://site.api.espn.com/apis/site/v2/sports/soccer/eng.1/scoreboard",
    method: "GET",
    headers: &[("accept", "application/json")],
    response_matches: &[concat!(
        r#""shortName":"(?<fixture1>[^"]+)""#,
        r#"(?:[\s\S]*?"shortName":"(?<fixture2>[^"]+)")?"#,
        r#"(?:[\s\S]*?"shortName":"(?<fixture3>[^"]+)")?"#,
    )],
    response_redactions: &[RedactionSpec {
        json_path: Some("$.events"),
        regex: None,
    }],
};

/// Look up the spec for a source kind.
pub fn source_spec(kind: SourceKind) -> &'static SourceSpec {
    match kind {
        SourceKind::PriceFeed => &PRICE_FEED,
        SourceKind::EconomicIndicators => &ECONOMIC_INDICATORS,
        SourceKind::Rankings => &RANKINGS,
        SourceKind::Weather => &WEATHER,
        SourceKind::LiveScores => &LIVE_SCORES,
    }
}

/// Resolve a source identifier string to its spec.
pub fn resolve(name: &str) -> Result<&'static SourceSpec, RegistryError> {
    Ok(source_spec(SourceKind::parse(name)?))
}
