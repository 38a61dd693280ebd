use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use marketlens_market_data::{MarketDataError, QuoteProvider, RawPayload};
use serde_json::json;

use super::*;

// =========================================================================
// Mock QuoteProvider
// =========================================================================

#[derive(Clone)]
enum Reply {
    Quote(serde_json::Value),
    RateLimited,
    Timeout,
}

#[derive(Default)]
struct MockProvider {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl MockProvider {
    fn with(mut self, symbol: &str, reply: Reply) -> Self {
        self.replies.insert(symbol.to_string(), reply);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn live_quote(symbol: &str, price: &str) -> Reply {
    Reply::Quote(json!({
        "Global Quote": {
            "01. symbol": symbol,
            "02. open": "10.0000",
            "03. high": "11.0000",
            "04. low": "9.0000",
            "05. price": price,
            "06. volume": "1234",
            "07. latest trading day": "2024-06-03",
            "08. previous close": "10.0000",
            "09. change": "0.5000",
            "10. change percent": "5.0000%"
        }
    }))
}

#[async_trait]
impl QuoteProvider for MockProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<RawPayload, MarketDataError> {
        self.calls.lock().unwrap().push(symbol.to_string());
        match self.replies.get(symbol) {
            Some(Reply::Quote(value)) => Ok(value.as_object().cloned().unwrap_or_default()),
            Some(Reply::RateLimited) => Err(MarketDataError::RateLimited {
                message: "Thank you for using Alpha Vantage!".to_string(),
            }),
            Some(Reply::Timeout) | None => Err(MarketDataError::Timeout {
                provider: "MOCK".to_string(),
            }),
        }
    }

    async fn check_key(&self) -> Result<RawPayload, MarketDataError> {
        unimplemented!()
    }
}

fn service(provider: MockProvider, mode: TrendingMode) -> (QuoteService, Arc<MockProvider>) {
    let provider = Arc::new(provider);
    (QuoteService::new(provider.clone(), mode), provider)
}

#[tokio::test]
async fn test_live_quote_is_normalized() {
    let (service, provider) = service(
        MockProvider::default().with("MSFT", live_quote("MSFT", "420.1000")),
        TrendingMode::Sample,
    );
    let record = service.get_quote("  msft ").await;
    assert_eq!(record.symbol, "MSFT");
    assert_eq!(record.price, "420.1000");
    assert_eq!(provider.calls(), vec!["MSFT"]);
}

#[tokio::test]
async fn test_rate_limited_quote_falls_back_to_sample() {
    let (service, _) = service(
        MockProvider::default().with("AAPL", Reply::RateLimited),
        TrendingMode::Sample,
    );
    let record = service.get_quote("AAPL").await;
    assert_eq!(record.symbol, "AAPL");
    assert_eq!(record.price, "172.6200");
}

#[tokio::test]
async fn test_unknown_symbol_failure_synthesizes_placeholder() {
    let (service, _) = service(
        MockProvider::default().with("ZZZZ", Reply::Timeout),
        TrendingMode::Sample,
    );
    let record = service.get_quote("zzzz").await;
    assert_eq!(record.symbol, "ZZZZ");
    assert_eq!(record.price, "100.00");
}

#[tokio::test]
async fn test_malformed_payload_falls_back() {
    let (service, _) = service(
        MockProvider::default().with("IBM", Reply::Quote(json!({"Global Quote": {}}))),
        TrendingMode::Sample,
    );
    let record = service.get_quote("IBM").await;
    assert_eq!(record.price, "193.1500");
}

#[tokio::test]
async fn test_sample_trending_makes_no_upstream_calls() {
    let (service, provider) = service(MockProvider::default(), TrendingMode::Sample);
    let trending = service.get_trending().await;
    let symbols: Vec<_> = trending.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(symbols, TRENDING_SYMBOLS.to_vec());
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_live_trending_skips_failures_and_keeps_order() {
    let provider = MockProvider::default()
        .with("AAPL", live_quote("AAPL", "1.00"))
        .with("MSFT", Reply::RateLimited)
        .with("NVDA", live_quote("NVDA", "2.00"))
        .with("TSLA", live_quote("TSLA", "3.00"));
    let (service, provider) = service(provider, TrendingMode::Live);

    let trending = service.get_trending().await;
    let symbols: Vec<_> = trending.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["AAPL", "NVDA", "TSLA"]);
    assert_eq!(provider.calls().len(), TRENDING_SYMBOLS.len());
}

#[test]
fn test_recommendations_are_static() {
    let (service, _) = service(MockProvider::default(), TrendingMode::Sample);
    let recommendations = service.get_recommendations();
    assert_eq!(recommendations.len(), 3);
    assert_eq!(recommendations[0].symbol, "AMD");
    assert_eq!(recommendations[0].confidence, 0.85);
    assert_eq!(recommendations[2].symbol, "SOFI");
}

#[test]
fn test_trending_mode_parsing() {
    assert_eq!("live".parse::<TrendingMode>().unwrap(), TrendingMode::Live);
    let padded: TrendingMode = " Sample ".parse().unwrap();
    assert_eq!(padded, TrendingMode::Sample);
    assert!("cached".parse::<TrendingMode>().is_err());
}
