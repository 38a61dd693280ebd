//! Quote domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Symbols served by the trending endpoint, in response order.
pub const TRENDING_SYMBOLS: [&str; 7] = ["AAPL", "GOOGL", "MSFT", "AMZN", "NVDA", "META", "TSLA"];

/// A static stock recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub symbol: String,
    pub reason: String,
    pub confidence: f64,
}

pub const RECOMMENDATIONS: [(&str, &str, f64); 3] = [
    ("AMD", "Strong growth in AI and data center markets", 0.85),
    ("PLTR", "Expanding AI capabilities and government contracts", 0.78),
    ("SOFI", "Digital banking growth and expanding user base", 0.72),
];

/// Where trending quotes come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendingMode {
    /// Sample quotes only, no upstream calls
    #[default]
    Sample,
    /// Live upstream quotes, failures skipped
    Live,
}

impl fmt::Display for TrendingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendingMode::Sample => f.write_str("sample"),
            TrendingMode::Live => f.write_str("live"),
        }
    }
}

impl FromStr for TrendingMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" => Ok(TrendingMode::Sample),
            "live" => Ok(TrendingMode::Live),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown trending mode '{}', expected 'sample' or 'live'",
                other
            ))),
        }
    }
}
