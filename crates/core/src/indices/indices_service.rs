use marketlens_market_data::{IndexComponentGenerator, IndexConstituent, KNOWN_INDICES};

use super::indices_model::{
    IndexListing, IndexStocksQuery, MarketIndexSummary, MarketOverview, MAX_LIMIT, MIN_LIMIT,
};
use super::indices_traits::IndexServiceTrait;
use crate::errors::{Result, ValidationError};

const MARKET_OVERVIEW: [(&str, MarketIndexSummary); 4] = [
    (
        "S&P 500",
        MarketIndexSummary {
            symbol: "^GSPC",
            price: "4,514.02",
            change: "+67.89",
            change_percent: "+1.53%",
            volume: "2.5B",
        },
    ),
    (
        "Dow Jones",
        MarketIndexSummary {
            symbol: "^DJI",
            price: "35,390.15",
            change: "+391.16",
            change_percent: "+1.12%",
            volume: "356.2M",
        },
    ),
    (
        "NASDAQ",
        MarketIndexSummary {
            symbol: "^IXIC",
            price: "14,176.32",
            change: "+215.44",
            change_percent: "+1.54%",
            volume: "5.1B",
        },
    ),
    (
        "Russell 2000",
        MarketIndexSummary {
            symbol: "^RUT",
            price: "1,792.55",
            change: "+24.01",
            change_percent: "+1.36%",
            volume: "2.3B",
        },
    ),
];

pub struct IndexService {
    generator: IndexComponentGenerator,
}

impl IndexService {
    pub fn new(generator: IndexComponentGenerator) -> Self {
        IndexService { generator }
    }
}

impl IndexServiceTrait for IndexService {
    fn list_indices(&self) -> Vec<IndexListing> {
        KNOWN_INDICES
            .iter()
            .map(|index| IndexListing {
                symbol: index.symbol.to_string(),
                name: index.name.to_string(),
            })
            .collect()
    }

    fn market_overview(&self) -> MarketOverview {
        MarketOverview(MARKET_OVERVIEW.to_vec())
    }

    fn get_components(
        &self,
        index_symbol: &str,
        query: IndexStocksQuery,
    ) -> Result<Vec<IndexConstituent>> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&query.limit) {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: MIN_LIMIT,
                max: MAX_LIMIT,
                value: query.limit,
            }
            .into());
        }

        let constituents = self.generator.components_for(
            index_symbol,
            query.limit as usize,
            query.sort_by,
            query.sort_order,
        )?;
        Ok(constituents)
    }
}
