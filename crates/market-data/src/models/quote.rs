use serde::{Deserialize, Serialize};

/// Substitute for an unusable percentage field
pub const PERCENT_DEFAULT: &str = "0.00%";

/// Substitute for any other unusable numeric field
pub const NUMERIC_DEFAULT: &str = "0.00";

/// Upstream labels of the `GLOBAL_QUOTE` payload.
///
/// These strings are part of the public response contract and must not change.
pub mod labels {
    pub const GLOBAL_QUOTE: &str = "Global Quote";
    pub const SYMBOL: &str = "01. symbol";
    pub const OPEN: &str = "02. open";
    pub const HIGH: &str = "03. high";
    pub const LOW: &str = "04. low";
    pub const PRICE: &str = "05. price";
    pub const VOLUME: &str = "06. volume";
    pub const LATEST_TRADING_DAY: &str = "07. latest trading day";
    pub const PREVIOUS_CLOSE: &str = "08. previous close";
    pub const CHANGE: &str = "09. change";
    pub const CHANGE_PERCENT: &str = "10. change percent";
}

/// A normalized quote snapshot.
///
/// Numeric fields keep the upstream string format. Every numeric field,
/// after stripping a trailing `%`, parses as a finite number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    #[serde(rename = "01. symbol")]
    pub symbol: String,
    #[serde(rename = "02. open")]
    pub open: String,
    #[serde(rename = "03. high")]
    pub high: String,
    #[serde(rename = "04. low")]
    pub low: String,
    #[serde(rename = "05. price")]
    pub price: String,
    #[serde(rename = "06. volume")]
    pub volume: String,
    #[serde(rename = "07. latest trading day")]
    pub latest_trading_day: String,
    #[serde(rename = "08. previous close")]
    pub previous_close: String,
    #[serde(rename = "09. change")]
    pub change: String,
    #[serde(rename = "10. change percent")]
    pub change_percent: String,
}

impl QuoteRecord {
    /// Numeric-designated fields paired with their upstream labels.
    pub fn numeric_fields(&self) -> [(&'static str, &str); 8] {
        [
            (labels::OPEN, &self.open),
            (labels::HIGH, &self.high),
            (labels::LOW, &self.low),
            (labels::PRICE, &self.price),
            (labels::VOLUME, &self.volume),
            (labels::PREVIOUS_CLOSE, &self.previous_close),
            (labels::CHANGE, &self.change),
            (labels::CHANGE_PERCENT, &self.change_percent),
        ]
    }
}
