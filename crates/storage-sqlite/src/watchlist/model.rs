//! Database models for the watchlist.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database model for watchlist entries
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::watchlist)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WatchlistEntryDB {
    pub id: String,
    pub symbol: String,
    pub added_at: NaiveDateTime,
}

/// Database model for inserting a watchlist entry
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::watchlist)]
pub struct NewWatchlistEntryDB {
    pub id: String,
    pub symbol: String,
    pub added_at: NaiveDateTime,
}

impl From<WatchlistEntryDB> for marketlens_core::watchlist::WatchlistEntry {
    fn from(db: WatchlistEntryDB) -> Self {
        Self {
            id: db.id,
            symbol: db.symbol,
            added_at: db.added_at,
        }
    }
}
