//! Upstream quote provider trait.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::RawPayload;

/// Trait for the upstream market data source.
///
/// Implementations perform exactly one request per call and classify
/// upstream-reported failures into [`MarketDataError`]. Successful payloads
/// are returned raw for the normalizer.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "ALPHA_VANTAGE".
    fn id(&self) -> &'static str;

    /// Fetch the latest quote payload for a symbol.
    async fn fetch_quote(&self, symbol: &str) -> Result<RawPayload, MarketDataError>;

    /// Lightweight request used to check that the API key works.
    async fn check_key(&self) -> Result<RawPayload, MarketDataError>;
}
