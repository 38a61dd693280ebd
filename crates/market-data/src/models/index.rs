use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;
use crate::index::roster::KNOWN_INDICES;

/// A company listed in an index roster
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Company {
    pub symbol: &'static str,
    pub name: &'static str,
}

/// One of the known market indices together with its company roster
#[derive(Debug, PartialEq, Eq)]
pub struct IndexDescriptor {
    pub symbol: &'static str,
    pub name: &'static str,
    pub roster: &'static [Company],
}

impl IndexDescriptor {
    /// Looks up a known index by its symbol (e.g. `^GSPC`).
    pub fn find(symbol: &str) -> Option<&'static IndexDescriptor> {
        KNOWN_INDICES.iter().find(|index| index.symbol == symbol)
    }

    /// File stem used for the persisted sample set, `^GSPC` -> `GSPC_components`.
    pub fn sample_file_stem(&self) -> String {
        format!("{}_components", self.symbol.replace('^', ""))
    }
}

/// A company belonging to an index, with randomized sample market data
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexConstituent {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: String,
    pub volume: u64,
    pub market_cap: f64,
    pub sector: String,
}

impl IndexConstituent {
    /// Numeric value of `change_percent` with the `%` stripped.
    /// Unparseable text compares as zero.
    pub fn change_percent_value(&self) -> f64 {
        self.change_percent
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .unwrap_or(0.0)
    }
}

/// Field used to order index constituents
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Price,
    Change,
    ChangePercent,
    Volume,
    #[default]
    MarketCap,
    Symbol,
    Name,
    Sector,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::Price,
        SortField::Change,
        SortField::ChangePercent,
        SortField::Volume,
        SortField::MarketCap,
        SortField::Symbol,
        SortField::Name,
        SortField::Sector,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::Change => "change",
            SortField::ChangePercent => "change_percent",
            SortField::Volume => "volume",
            SortField::MarketCap => "market_cap",
            SortField::Symbol => "symbol",
            SortField::Name => "name",
            SortField::Sector => "sector",
        }
    }

    /// Ascending comparison of two constituents on this field.
    pub fn compare(&self, a: &IndexConstituent, b: &IndexConstituent) -> Ordering {
        match self {
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Change => a.change.total_cmp(&b.change),
            SortField::ChangePercent => a
                .change_percent_value()
                .total_cmp(&b.change_percent_value()),
            SortField::Volume => a.volume.cmp(&b.volume),
            SortField::MarketCap => a.market_cap.total_cmp(&b.market_cap),
            SortField::Symbol => a.symbol.cmp(&b.symbol),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Sector => a.sector.cmp(&b.sector),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| MarketDataError::InvalidParameter {
                name: "sort_by",
                value: s.to_string(),
            })
    }
}

/// Direction of the index constituent ordering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(MarketDataError::InvalidParameter {
                name: "sort_order",
                value: other.to_string(),
            }),
        }
    }
}
