//! Quote normalization.
//!
//! Turns a raw `GLOBAL_QUOTE` payload into a [`QuoteRecord`] whose numeric
//! fields are guaranteed to parse as finite numbers. Unusable numeric values
//! are replaced by [`NUMERIC_DEFAULT`] / [`PERCENT_DEFAULT`] instead of failing
//! the whole quote.

use log::warn;
use serde_json::{Map, Value};

use crate::errors::MarketDataError;
use crate::models::{labels, QuoteRecord, RawPayload, NUMERIC_DEFAULT, PERCENT_DEFAULT};

/// Literals the upstream occasionally emits in place of a number.
const INVALID_LITERALS: [&str; 3] = ["nan", "null", "undefined"];

/// Normalizes a raw upstream payload into a well-formed quote record.
///
/// # Errors
///
/// Returns [`MarketDataError::MissingField`] when the `"Global Quote"` object,
/// the symbol or the price is absent or empty.
pub fn normalize(payload: &RawPayload) -> Result<QuoteRecord, MarketDataError> {
    let quote = payload
        .get(labels::GLOBAL_QUOTE)
        .and_then(Value::as_object)
        .ok_or_else(|| {
            MarketDataError::MissingField(labels::GLOBAL_QUOTE.to_string())
        })?;

    let symbol = required_text(quote, labels::SYMBOL)?;
    required_text(quote, labels::PRICE)?;

    Ok(QuoteRecord {
        symbol,
        open: numeric(quote, labels::OPEN),
        high: numeric(quote, labels::HIGH),
        low: numeric(quote, labels::LOW),
        price: numeric(quote, labels::PRICE),
        volume: numeric(quote, labels::VOLUME),
        latest_trading_day: text(quote, labels::LATEST_TRADING_DAY).unwrap_or_default(),
        previous_close: numeric(quote, labels::PREVIOUS_CLOSE),
        change: numeric(quote, labels::CHANGE),
        change_percent: percent(quote, labels::CHANGE_PERCENT),
    })
}

/// Parses a numeric field's text, returning the text with any trailing `%`
/// stripped.
pub fn parse_numeric(field: &str, raw: Option<&str>) -> Result<String, MarketDataError> {
    let invalid = |value: &str| MarketDataError::InvalidNumeric {
        field: field.to_string(),
        value: value.to_string(),
    };

    let raw = raw.ok_or_else(|| invalid(""))?;
    let stripped = raw.trim().trim_end_matches('%').trim_end();

    if stripped.is_empty()
        || INVALID_LITERALS
            .iter()
            .any(|literal| stripped.eq_ignore_ascii_case(literal))
    {
        return Err(invalid(raw));
    }

    stripped
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(raw))?;

    Ok(stripped.to_string())
}

/// Returns true when every numeric field of the record parses as a finite number.
pub fn is_numeric_clean(record: &QuoteRecord) -> bool {
    record
        .numeric_fields()
        .iter()
        .all(|(label, value)| parse_numeric(label, Some(value)).is_ok())
}

fn text(quote: &Map<String, Value>, key: &str) -> Option<String> {
    match quote.get(key)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn required_text(quote: &Map<String, Value>, key: &str) -> Result<String, MarketDataError> {
    text(quote, key)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| MarketDataError::MissingField(key.to_string()))
}

fn numeric(quote: &Map<String, Value>, key: &str) -> String {
    coerce(quote, key).unwrap_or_else(|| NUMERIC_DEFAULT.to_string())
}

fn percent(quote: &Map<String, Value>, key: &str) -> String {
    coerce(quote, key)
        .map(|value| format!("{value}%"))
        .unwrap_or_else(|| PERCENT_DEFAULT.to_string())
}

fn coerce(quote: &Map<String, Value>, key: &str) -> Option<String> {
    match parse_numeric(key, text(quote, key).as_deref()) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Coercing {} to default: {}", key, e);
            None
        }
    }
}
