//! SQLite storage implementation for MarketLens.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `marketlens-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The watchlist repository
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod watchlist;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from marketlens-core for convenience
pub use marketlens_core::errors::{DatabaseError, Error, Result};
