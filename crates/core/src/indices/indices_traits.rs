use marketlens_market_data::IndexConstituent;

use super::indices_model::{IndexListing, IndexStocksQuery, MarketOverview};
use crate::errors::Result;

/// Trait for index service operations
pub trait IndexServiceTrait: Send + Sync {
    fn list_indices(&self) -> Vec<IndexListing>;
    fn market_overview(&self) -> MarketOverview;
    fn get_components(
        &self,
        index_symbol: &str,
        query: IndexStocksQuery,
    ) -> Result<Vec<IndexConstituent>>;
}
