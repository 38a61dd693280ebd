//! Watchlist domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

pub const MAX_SYMBOL_LEN: usize = 16;

/// A symbol tracked on the watchlist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchlistEntry {
    pub id: String,
    pub symbol: String,
    /// UTC
    pub added_at: NaiveDateTime,
}

/// Input model for adding a symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWatchlistEntry {
    pub symbol: String,
}

/// Canonicalizes a ticker symbol: trimmed, upper-cased, 1 to 16 characters
/// from `A-Z`, `0-9`, `.`, `^` and `-`.
pub fn validate_symbol(symbol: &str) -> Result<String, ValidationError> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() || symbol.chars().count() > MAX_SYMBOL_LEN {
        return Err(ValidationError::InvalidInput(format!(
            "Symbol must be 1 to {} characters",
            MAX_SYMBOL_LEN
        )));
    }
    let allowed = |c: char| c.is_ascii_uppercase() || c.is_ascii_digit() || ".^-".contains(c);
    if let Some(c) = symbol.chars().find(|c| !allowed(*c)) {
        return Err(ValidationError::InvalidInput(format!(
            "Symbol contains invalid character '{}'",
            c
        )));
    }
    Ok(symbol)
}
