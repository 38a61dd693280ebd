//! Upstream market data provider.
//!
//! - The `QuoteProvider` trait, the seam between the services and the network
//! - The Alpha Vantage client implementing it

pub mod alpha_vantage;
mod traits;

pub use traits::QuoteProvider;
