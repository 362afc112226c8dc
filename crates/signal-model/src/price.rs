use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four price series a `Source` parameter may select from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriceSource {
    Open,
    High,
    Low,
    Close,
}

impl PriceSource {
    pub const ALL: [PriceSource; 4] = [
        PriceSource::Open,
        PriceSource::High,
        PriceSource::Low,
        PriceSource::Close,
    ];

    /// The identifier used in canonical call text.
    pub fn as_str(self) -> &'static str {
        match self {
            PriceSource::Open => "OPEN",
            PriceSource::High => "HIGH",
            PriceSource::Low => "LOW",
            PriceSource::Close => "CLOSE",
        }
    }
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("not a price source: {0} (expected OPEN, HIGH, LOW or CLOSE)")]
pub struct ParsePriceSourceError(pub String);

impl FromStr for PriceSource {
    type Err = ParsePriceSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(PriceSource::Open),
            "HIGH" => Ok(PriceSource::High),
            "LOW" => Ok(PriceSource::Low),
            "CLOSE" => Ok(PriceSource::Close),
            other => Err(ParsePriceSourceError(other.to_string())),
        }
    }
}
