//! MarketLens Core - domain services and traits.
//!
//! This crate sits between the HTTP surface and the data sources. It is
//! database-agnostic: the watchlist repository trait is implemented by the
//! `storage-sqlite` crate, and upstream access goes through the
//! `QuoteProvider` trait of the market data crate.

pub mod errors;
pub mod indices;
pub mod quotes;
pub mod status;
pub mod watchlist;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
