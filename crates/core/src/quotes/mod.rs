//! Quotes module - single quotes, trending quotes and recommendations.

mod quotes_model;
mod quotes_service;
mod quotes_traits;

#[cfg(test)]
mod quotes_service_tests;

pub use quotes_model::{Recommendation, TrendingMode, RECOMMENDATIONS, TRENDING_SYMBOLS};
pub use quotes_service::QuoteService;
pub use quotes_traits::QuoteServiceTrait;
