//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers the upstream client, the quote normalizer and
//! the index component generator. Whether an error reaches an HTTP caller is
//! decided by the service layer: quote lookups always recover through the
//! fallback store, index and status lookups surface the error.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The upstream API reported a business error (its `"Error Message"` key)
    /// or answered with a non-success HTTP status.
    #[error("Upstream error: {message}")]
    UpstreamError {
        /// The message reported by the upstream
        message: String,
    },

    /// The upstream throttled the request (a `"Note"` key or HTTP 429).
    #[error("Rate limited: {message}")]
    RateLimited {
        /// The throttling note returned by the upstream
        message: String,
    },

    /// A required key is absent or empty in the upstream payload.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A numeric-designated field holds a value that is not a finite number.
    /// Recovered locally by the normalizer, never surfaced to callers.
    #[error("Invalid numeric value for {field}: {value:?}")]
    InvalidNumeric {
        /// Upstream key of the offending field
        field: String,
        /// The raw text that failed to parse
        value: String,
    },

    /// Unknown symbol or index.
    #[error("{0}")]
    NotFound(String),

    /// A request parameter is outside its enumerated set.
    #[error("Invalid value for {name}: {value}")]
    InvalidParameter {
        /// Name of the parameter
        name: &'static str,
        /// The rejected value
        value: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// Catch-all for local failures (unparseable payloads, sample file I/O).
    #[error("Internal error: {0}")]
    Internal(String),

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns true when the upstream itself classified the failure, as
    /// opposed to a transport or local failure.
    pub fn is_upstream_classified(&self) -> bool {
        matches!(self, Self::UpstreamError { .. } | Self::RateLimited { .. })
    }
}

impl From<std::io::Error> for MarketDataError {
    fn from(err: std::io::Error) -> Self {
        MarketDataError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for MarketDataError {
    fn from(err: serde_json::Error) -> Self {
        MarketDataError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::MissingField("05. price".to_string());
        assert_eq!(format!("{}", error), "Missing field: 05. price");

        let error = MarketDataError::RateLimited {
            message: "5 calls per minute".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate limited: 5 calls per minute");

        let error = MarketDataError::NotFound("Index ^FAKE not found".to_string());
        assert_eq!(format!("{}", error), "Index ^FAKE not found");

        let error = MarketDataError::InvalidNumeric {
            field: "02. open".to_string(),
            value: "NaN".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid numeric value for 02. open: \"NaN\""
        );
    }

    #[test]
    fn test_upstream_classification() {
        assert!(MarketDataError::UpstreamError {
            message: "Invalid API call".to_string()
        }
        .is_upstream_classified());
        assert!(MarketDataError::RateLimited {
            message: "note".to_string()
        }
        .is_upstream_classified());
        assert!(!MarketDataError::Timeout {
            provider: "ALPHA_VANTAGE".to_string()
        }
        .is_upstream_classified());
        let missing = MarketDataError::MissingField("01. symbol".to_string());
        assert!(!missing.is_upstream_classified());
    }

    #[test]
    fn test_io_error_becomes_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: MarketDataError = io.into();
        assert!(matches!(error, MarketDataError::Internal(msg) if msg == "gone"));
    }
}
