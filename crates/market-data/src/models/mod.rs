//! Market data models
//!
//! This module contains the data types shared by the upstream client, the
//! normalizer and the index component generator:
//! - `types` - Type aliases for raw upstream payloads and provider identifiers
//! - `quote` - The normalized quote record (QuoteRecord) and its wire labels
//! - `index` - Index descriptors, constituents and sort parameters

mod index;
mod quote;
mod types;

pub use index::{Company, IndexConstituent, IndexDescriptor, SortField, SortOrder};
pub use quote::{labels, QuoteRecord, NUMERIC_DEFAULT, PERCENT_DEFAULT};
pub use types::{ProviderId, RawPayload};
