//! API status module - upstream key check and key masking.

mod status_model;
mod status_service;
mod status_traits;

pub use status_model::{mask_api_key, ApiStatus, ApiStatusKind, USAGE_INFO};
pub use status_service::StatusService;
pub use status_traits::StatusServiceTrait;
