use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, info, warn};
use marketlens_market_data::{
    normalize, FallbackStore, MarketDataError, QuoteProvider, QuoteRecord,
};

use super::quotes_model::{Recommendation, TrendingMode, RECOMMENDATIONS, TRENDING_SYMBOLS};
use super::quotes_traits::QuoteServiceTrait;

pub struct QuoteService {
    provider: Arc<dyn QuoteProvider>,
    fallback: FallbackStore,
    trending_mode: TrendingMode,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn QuoteProvider>, mode: TrendingMode) -> Self {
        QuoteService {
            provider,
            fallback: FallbackStore::new(),
            trending_mode: mode,
        }
    }

    fn canonical_symbol(symbol: &str) -> String {
        symbol.trim().to_uppercase()
    }

    async fn fetch_live(&self, symbol: &str) -> Result<QuoteRecord, MarketDataError> {
        let payload = self.provider.fetch_quote(symbol).await?;
        normalize(&payload)
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_quote(&self, symbol: &str) -> QuoteRecord {
        let symbol = Self::canonical_symbol(symbol);
        match self.fetch_live(&symbol).await {
            Ok(record) => record,
            Err(e) => {
                if e.is_upstream_classified() {
                    info!("Serving fallback quote for {}: {}", symbol, e);
                } else {
                    warn!("Serving fallback quote for {}: {}", symbol, e);
                }
                self.fallback.resolve(&symbol)
            }
        }
    }

    async fn get_trending(&self) -> Vec<QuoteRecord> {
        match self.trending_mode {
            TrendingMode::Sample => TRENDING_SYMBOLS
                .iter()
                .map(|symbol| self.fallback.resolve(symbol))
                .collect(),
            TrendingMode::Live => {
                let results = join_all(TRENDING_SYMBOLS.iter().map(|s| self.fetch_live(s))).await;
                TRENDING_SYMBOLS
                    .iter()
                    .zip(results)
                    .filter_map(|(symbol, result)| match result {
                        Ok(record) => Some(record),
                        Err(e) => {
                            debug!("Skipping trending symbol {}: {}", symbol, e);
                            None
                        }
                    })
                    .collect()
            }
        }
    }

    fn get_recommendations(&self) -> Vec<Recommendation> {
        RECOMMENDATIONS
            .iter()
            .map(|(symbol, reason, confidence)| Recommendation {
                symbol: symbol.to_string(),
                reason: reason.to_string(),
                confidence: *confidence,
            })
            .collect()
    }
}
