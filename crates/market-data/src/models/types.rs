use serde_json::{Map, Value};

/// Provider identifier, a static constant such as "ALPHA_VANTAGE"
pub type ProviderId = &'static str;

/// A parsed upstream JSON object, before classification or normalization
pub type RawPayload = Map<String, Value>;
