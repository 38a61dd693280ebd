//! Alpha Vantage upstream client.
//!
//! Uses the `GLOBAL_QUOTE` endpoint for quotes and a one-minute
//! `TIME_SERIES_INTRADAY` request as the key check.
//!
//! Note: Alpha Vantage free tier is limited to 5 API calls per minute. The
//! client does not throttle; throttled responses surface as `RateLimited`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::RawPayload;
use crate::provider::QuoteProvider;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
pub const PROVIDER_ID: &str = "ALPHA_VANTAGE";

const ERROR_MESSAGE_KEY: &str = "Error Message";
const NOTE_KEY: &str = "Note";
const INFORMATION_KEY: &str = "Information";

/// Symbol used for the key check.
const STATUS_SYMBOL: &str = "IBM";

pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantageClient {
    /// Creates a client bounded by `timeout` per request.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, MarketDataError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Make one request to the Alpha Vantage API and classify the result.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<RawPayload, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.api_key));

        let url = Url::parse_with_params(&self.base_url, &all_params).map_err(|e| {
            MarketDataError::Internal(format!("Failed to build URL: {}", e))
        })?;

        debug!(
            "Alpha Vantage request: {}",
            redact(url.as_str(), &self.api_key)
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e.without_url())
            }
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                message: format!("HTTP {}", status),
            });
        }
        if !status.is_success() {
            return Err(MarketDataError::UpstreamError {
                message: format!("HTTP {}", status),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e.without_url())
            }
        })?;

        let payload = match serde_json::from_str::<Value>(&body)? {
            Value::Object(map) => map,
            other => {
                return Err(MarketDataError::Internal(format!(
                    "Expected a JSON object from {}, got {}",
                    PROVIDER_ID,
                    json_kind(&other)
                )))
            }
        };

        classify(payload)
    }
}

/// Check for API-level errors in a parsed response.
pub fn classify(payload: RawPayload) -> Result<RawPayload, MarketDataError> {
    if let Some(msg) = payload.get(ERROR_MESSAGE_KEY) {
        return Err(MarketDataError::UpstreamError {
            message: message_text(msg),
        });
    }

    // "Note" is how the upstream reports throttling
    if let Some(msg) = payload.get(NOTE_KEY) {
        return Err(MarketDataError::RateLimited {
            message: message_text(msg),
        });
    }

    if let Some(msg) = payload.get(INFORMATION_KEY) {
        let text = message_text(msg);
        let lower = text.to_ascii_lowercase();
        if lower.contains("api call frequency") || lower.contains("rate limit") {
            return Err(MarketDataError::RateLimited { message: text });
        }
        warn!("Alpha Vantage info: {}", text);
    }

    Ok(payload)
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn redact(url: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        url.to_string()
    } else {
        url.replace(api_key, "***")
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageClient {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<RawPayload, MarketDataError> {
        self.fetch(&[("function", "GLOBAL_QUOTE"), ("symbol", symbol)])
            .await
    }

    async fn check_key(&self) -> Result<RawPayload, MarketDataError> {
        self.fetch(&[
            ("function", "TIME_SERIES_INTRADAY"),
            ("symbol", STATUS_SYMBOL),
            ("interval", "1min"),
            ("datatype", "json"),
        ])
        .await
    }
}
