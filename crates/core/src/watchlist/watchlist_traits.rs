use async_trait::async_trait;

use super::watchlist_model::{NewWatchlistEntry, WatchlistEntry};
use crate::errors::Result;

/// Trait for watchlist repository operations
#[async_trait]
pub trait WatchlistRepositoryTrait: Send + Sync {
    fn load_entries(&self) -> Result<Vec<WatchlistEntry>>;
    fn find_by_symbol(&self, symbol: &str) -> Result<Option<WatchlistEntry>>;
    async fn insert_entry(&self, new_entry: NewWatchlistEntry) -> Result<WatchlistEntry>;
    async fn delete_by_symbol(&self, symbol: String) -> Result<usize>;
}

/// Trait for watchlist service operations
#[async_trait]
pub trait WatchlistServiceTrait: Send + Sync {
    fn get_entries(&self) -> Result<Vec<WatchlistEntry>>;
    async fn add_symbol(&self, symbol: &str) -> Result<WatchlistEntry>;
    async fn remove_symbol(&self, symbol: &str) -> Result<()>;
}
