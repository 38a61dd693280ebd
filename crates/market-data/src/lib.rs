//! MarketLens Market Data Crate
//!
//! Everything between the HTTP surface and the upstream stock API:
//!
//! - [`provider`] - The `QuoteProvider` seam and the Alpha Vantage client
//! - [`normalizer`] - Turns raw `GLOBAL_QUOTE` payloads into numeric-clean [`QuoteRecord`]s
//! - [`fallback`] - Sample quotes used whenever live data is unusable
//! - [`index`] - Synthetic index constituents, persisted per index
//!
//! # Quote flow
//!
//! ```text
//! QuoteProvider::fetch_quote --> normalize --> QuoteRecord
//!          |                        |
//!          +------ on error --------+--> FallbackStore::resolve
//! ```

pub mod errors;
pub mod fallback;
pub mod index;
pub mod models;
pub mod normalizer;
pub mod provider;

pub use errors::MarketDataError;
pub use fallback::FallbackStore;
pub use index::{IndexComponentGenerator, SampleStore, KNOWN_INDICES, SECTORS};
pub use models::{
    Company, IndexConstituent, IndexDescriptor, ProviderId, QuoteRecord, RawPayload, SortField,
    SortOrder,
};
pub use normalizer::normalize;
pub use provider::alpha_vantage::AlphaVantageClient;
pub use provider::QuoteProvider;
