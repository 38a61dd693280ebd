//! Index domain models.

use marketlens_market_data::{SortField, SortOrder};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 100;

/// Symbol and display name of a known index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexListing {
    pub symbol: String,
    pub name: String,
}

/// Pre-formatted headline figures of an index
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MarketIndexSummary {
    pub symbol: &'static str,
    pub price: &'static str,
    pub change: &'static str,
    pub change_percent: &'static str,
    pub volume: &'static str,
}

/// Index summaries keyed by display name, serialized as a JSON object
/// in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketOverview(pub Vec<(&'static str, MarketIndexSummary)>);

impl MarketOverview {
    pub fn get(&self, name: &str) -> Option<&MarketIndexSummary> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, s)| s)
    }
}

impl Serialize for MarketOverview {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, summary) in &self.0 {
            map.serialize_entry(name, summary)?;
        }
        map.end()
    }
}

/// Parameters of an index constituents request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStocksQuery {
    pub limit: i64,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl Default for IndexStocksQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = IndexStocksQuery::default();
        assert_eq!(query.limit, 20);
        assert_eq!(query.sort_by, SortField::MarketCap);
        assert_eq!(query.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_overview_serializes_as_ordered_object() {
        let overview = MarketOverview(vec![
            (
                "B",
                MarketIndexSummary {
                    symbol: "^B",
                    price: "1",
                    change: "+1",
                    change_percent: "+1%",
                    volume: "1M",
                },
            ),
            (
                "A",
                MarketIndexSummary {
                    symbol: "^A",
                    price: "2",
                    change: "-2",
                    change_percent: "-2%",
                    volume: "2M",
                },
            ),
        ]);
        let json = serde_json::to_string(&overview).unwrap();
        assert!(json.starts_with("{\"B\":{\"symbol\":\"^B\""));
        assert!(json.find("\"A\"").unwrap() > json.find("\"B\"").unwrap());
    }
}
