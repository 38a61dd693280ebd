use async_trait::async_trait;

use super::status_model::ApiStatus;
use crate::errors::Result;

/// Trait for API status operations
#[async_trait]
pub trait StatusServiceTrait: Send + Sync {
    async fn check(&self) -> Result<ApiStatus>;
}
