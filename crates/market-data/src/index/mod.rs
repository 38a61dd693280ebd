//! Index component generator.
//!
//! Index membership is synthetic: each known index has a constant company
//! roster, and a randomized constituent set is generated once per index and
//! persisted to the sample directory for reuse.

mod generator;
pub mod roster;
mod store;

pub use generator::{generate_constituents, sort_constituents, IndexComponentGenerator};
pub use roster::{KNOWN_INDICES, SECTORS};
pub use store::SampleStore;
