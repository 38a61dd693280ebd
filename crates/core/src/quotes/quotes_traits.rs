use async_trait::async_trait;
use marketlens_market_data::QuoteRecord;

use super::quotes_model::Recommendation;

/// Trait for quote service operations
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Quote for a symbol. Falls back to sample data on any upstream failure.
    async fn get_quote(&self, symbol: &str) -> QuoteRecord;
    async fn get_trending(&self) -> Vec<QuoteRecord>;
    fn get_recommendations(&self) -> Vec<Recommendation>;
}
