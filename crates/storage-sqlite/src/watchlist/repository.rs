use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use marketlens_core::watchlist::{NewWatchlistEntry, WatchlistEntry, WatchlistRepositoryTrait};
use marketlens_core::Result;
use uuid::Uuid;

use super::model::{NewWatchlistEntryDB, WatchlistEntryDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::watchlist;
use crate::schema::watchlist::dsl::*;

pub struct WatchlistRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl WatchlistRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        WatchlistRepository { pool, writer }
    }
}

#[async_trait]
impl WatchlistRepositoryTrait for WatchlistRepository {
    fn load_entries(&self) -> Result<Vec<WatchlistEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let entries = watchlist
            .order((added_at.asc(), symbol.asc()))
            .select(WatchlistEntryDB::as_select())
            .load::<WatchlistEntryDB>(&mut conn)
            .into_core()?;
        Ok(entries.into_iter().map(WatchlistEntry::from).collect())
    }

    fn find_by_symbol(&self, symbol_to_find: &str) -> Result<Option<WatchlistEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let entry = watchlist
            .filter(symbol.eq(symbol_to_find))
            .select(WatchlistEntryDB::as_select())
            .first::<WatchlistEntryDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(entry.map(WatchlistEntry::from))
    }

    async fn insert_entry(&self, new_entry: NewWatchlistEntry) -> Result<WatchlistEntry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<WatchlistEntry> {
                let entry_db = NewWatchlistEntryDB {
                    id: Uuid::new_v4().to_string(),
                    symbol: new_entry.symbol,
                    added_at: Utc::now().naive_utc(),
                };

                let result_db = diesel::insert_into(watchlist::table)
                    .values(&entry_db)
                    .returning(WatchlistEntryDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(WatchlistEntry::from(result_db))
            })
            .await
    }

    async fn delete_by_symbol(&self, symbol_to_delete: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(watchlist.filter(symbol.eq(symbol_to_delete)))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations, spawn_writer};
    use marketlens_core::errors::{DatabaseError, Error};

    fn create_test_repository() -> (WatchlistRepository, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db").to_string_lossy().to_string();

        let db_path = init(&db_path).expect("Failed to init database");
        let pool = create_pool(&db_path).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        (WatchlistRepository::new(pool, writer), temp_dir)
    }

    fn new_entry(s: &str) -> NewWatchlistEntry {
        NewWatchlistEntry {
            symbol: s.to_string(),
        }
    }

    #[tokio::test]
    async fn test_crud_round_trip() {
        let (repo, _dir) = create_test_repository();
        assert!(repo.load_entries().unwrap().is_empty());

        let aapl = repo.insert_entry(new_entry("AAPL")).await.unwrap();
        let msft = repo.insert_entry(new_entry("MSFT")).await.unwrap();
        assert_eq!(aapl.symbol, "AAPL");
        assert_eq!(aapl.id.len(), 36);
        assert_ne!(aapl.id, msft.id);

        let entries = repo.load_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains(&aapl));

        assert_eq!(repo.find_by_symbol("MSFT").unwrap(), Some(msft));
        assert_eq!(repo.find_by_symbol("TSLA").unwrap(), None);

        assert_eq!(repo.delete_by_symbol("AAPL".to_string()).await.unwrap(), 1);
        assert_eq!(repo.delete_by_symbol("AAPL".to_string()).await.unwrap(), 0);
        assert_eq!(repo.load_entries().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_symbol_is_unique_violation() {
        let (repo, _dir) = create_test_repository();
        repo.insert_entry(new_entry("NVDA")).await.unwrap();
        let err = repo.insert_entry(new_entry("NVDA")).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
    }
}
