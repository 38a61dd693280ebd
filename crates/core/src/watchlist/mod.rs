//! Watchlist module - domain models, services, and traits.

mod watchlist_model;
mod watchlist_service;
mod watchlist_traits;

pub use watchlist_model::{validate_symbol, NewWatchlistEntry, WatchlistEntry, MAX_SYMBOL_LEN};
pub use watchlist_service::WatchlistService;
pub use watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
