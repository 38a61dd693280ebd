//! API status domain models.

use serde::{Deserialize, Serialize};

/// Usage note attached to every `active` status.
pub const USAGE_INFO: &str =
    "Standard API call frequency is 5 calls per minute and 500 calls per day";

/// Number of characters kept visible at each end of a masked key.
const MASK_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatusKind {
    Active,
    Error,
}

/// Result of probing the upstream with the configured key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiStatus {
    pub status: ApiStatusKind,
    pub message: String,
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_info: Option<String>,
}

/// Keeps the first and last five characters of a key: `ABCDE...FGHIJ`.
///
/// Keys too short to keep both ends without revealing everything are
/// rendered as `...`.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() < MASK_VISIBLE * 2 {
        return "...".to_string();
    }
    let head: String = chars[..MASK_VISIBLE].iter().collect();
    let tail: String = chars[chars.len() - MASK_VISIBLE..].iter().collect();
    format!("{head}...{tail}")
}
