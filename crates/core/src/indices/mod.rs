//! Indices module - index listing, market overview and index constituents.

mod indices_model;
mod indices_service;
mod indices_traits;

pub use indices_model::{
    IndexListing, IndexStocksQuery, MarketIndexSummary, MarketOverview, DEFAULT_LIMIT, MAX_LIMIT,
    MIN_LIMIT,
};
pub use indices_service::IndexService;
pub use indices_traits::IndexServiceTrait;
