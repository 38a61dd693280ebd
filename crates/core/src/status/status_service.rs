use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};
use marketlens_market_data::{MarketDataError, QuoteProvider};

use super::status_model::{mask_api_key, ApiStatus, ApiStatusKind, USAGE_INFO};
use super::status_traits::StatusServiceTrait;
use crate::errors::Result;

pub struct StatusService {
    provider: Arc<dyn QuoteProvider>,
    masked_key: String,
}

impl StatusService {
    pub fn new(provider: Arc<dyn QuoteProvider>, api_key: &str) -> Self {
        StatusService {
            provider,
            masked_key: mask_api_key(api_key),
        }
    }

    fn status(&self, status: ApiStatusKind, message: String, usage: bool) -> ApiStatus {
        ApiStatus {
            status,
            message,
            api_key: self.masked_key.clone(),
            usage_info: usage.then(|| USAGE_INFO.to_string()),
        }
    }
}

#[async_trait]
impl StatusServiceTrait for StatusService {
    async fn check(&self) -> Result<ApiStatus> {
        match self.provider.check_key().await {
            Ok(_) => Ok(self.status(
                ApiStatusKind::Active,
                "API key is valid and working".to_string(),
                true,
            )),
            Err(MarketDataError::RateLimited { message }) => {
                info!("Status check rate limited: {}", message);
                Ok(self.status(ApiStatusKind::Active, message, true))
            }
            Err(MarketDataError::UpstreamError { message }) => {
                warn!("Status check rejected by upstream: {}", message);
                Ok(self.status(ApiStatusKind::Error, message, false))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use marketlens_market_data::RawPayload;
    use std::sync::Mutex;

    struct StatusOnly {
        reply: Mutex<Option<std::result::Result<RawPayload, MarketDataError>>>,
    }

    impl StatusOnly {
        fn new(reply: std::result::Result<RawPayload, MarketDataError>) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Some(reply)),
            })
        }
    }

    #[async_trait]
    impl QuoteProvider for StatusOnly {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn fetch_quote(&self, _: &str) -> std::result::Result<RawPayload, MarketDataError> {
            unimplemented!()
        }

        async fn check_key(&self) -> std::result::Result<RawPayload, MarketDataError> {
            self.reply.lock().unwrap().take().unwrap()
        }
    }

    const KEY: &str = "ABCDE12345FGHIJ";

    #[tokio::test]
    async fn test_successful_check_is_active() {
        let service = StatusService::new(StatusOnly::new(Ok(RawPayload::new())), KEY);
        let status = service.check().await.unwrap();
        assert_eq!(status.status, ApiStatusKind::Active);
        assert_eq!(status.message, "API key is valid and working");
        assert_eq!(status.api_key, "ABCDE...FGHIJ");
        assert_eq!(status.usage_info.as_deref(), Some(USAGE_INFO));
    }

    #[tokio::test]
    async fn test_rate_limited_check_is_active_with_note() {
        let note = "Thank you for using Alpha Vantage! \
                    Our standard API call frequency is 5 calls per minute.";
        let service = StatusService::new(
            StatusOnly::new(Err(MarketDataError::RateLimited {
                message: note.to_string(),
            })),
            KEY,
        );
        let status = service.check().await.unwrap();
        assert_eq!(status.status, ApiStatusKind::Active);
        assert_eq!(status.message, note);
        assert!(status.usage_info.is_some());
    }

    #[tokio::test]
    async fn test_upstream_error_is_error_status() {
        let service = StatusService::new(
            StatusOnly::new(Err(MarketDataError::UpstreamError {
                message: "the parameter apikey is invalid or missing".to_string(),
            })),
            KEY,
        );
        let status = service.check().await.unwrap();
        assert_eq!(status.status, ApiStatusKind::Error);
        assert_eq!(status.message, "the parameter apikey is invalid or missing");
        assert_eq!(status.api_key, "ABCDE...FGHIJ");
        assert!(status.usage_info.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces() {
        let service = StatusService::new(
            StatusOnly::new(Err(MarketDataError::Timeout {
                provider: "MOCK".to_string(),
            })),
            KEY,
        );
        let err = service.check().await.unwrap_err();
        assert!(matches!(
            err,
            Error::MarketData(MarketDataError::Timeout { .. })
        ));
    }
}
