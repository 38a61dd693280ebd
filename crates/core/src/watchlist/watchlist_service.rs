use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::watchlist_model::{validate_symbol, NewWatchlistEntry, WatchlistEntry};
use super::watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
use crate::errors::{Error, Result};

pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepositoryTrait>,
}

impl WatchlistService {
    pub fn new(repository: Arc<dyn WatchlistRepositoryTrait>) -> Self {
        WatchlistService { repository }
    }
}

#[async_trait]
impl WatchlistServiceTrait for WatchlistService {
    fn get_entries(&self) -> Result<Vec<WatchlistEntry>> {
        self.repository.load_entries()
    }

    async fn add_symbol(&self, symbol: &str) -> Result<WatchlistEntry> {
        let symbol = validate_symbol(symbol)?;
        if self.repository.find_by_symbol(&symbol)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "Symbol {} is already on the watchlist",
                symbol
            )));
        }
        let entry = self
            .repository
            .insert_entry(NewWatchlistEntry { symbol })
            .await?;
        debug!("Added {} to the watchlist", entry.symbol);
        Ok(entry)
    }

    async fn remove_symbol(&self, symbol: &str) -> Result<()> {
        let symbol = validate_symbol(symbol)?;
        let deleted = self.repository.delete_by_symbol(symbol.clone()).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!(
                "Symbol {} is not on the watchlist",
                symbol
            )));
        }
        Ok(())
    }
}
