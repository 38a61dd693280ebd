//! Sample quotes served when the upstream cannot be used.

use log::debug;

use crate::models::QuoteRecord;

/// Trading day stamped on every sample quote.
pub const SAMPLE_TRADING_DAY: &str = "2024-03-15";

struct SampleQuote {
    symbol: &'static str,
    open: &'static str,
    high: &'static str,
    low: &'static str,
    price: &'static str,
    volume: &'static str,
    previous_close: &'static str,
    change: &'static str,
    change_percent: &'static str,
}

impl SampleQuote {
    fn to_record(&self) -> QuoteRecord {
        QuoteRecord {
            symbol: self.symbol.to_string(),
            open: self.open.to_string(),
            high: self.high.to_string(),
            low: self.low.to_string(),
            price: self.price.to_string(),
            volume: self.volume.to_string(),
            latest_trading_day: SAMPLE_TRADING_DAY.to_string(),
            previous_close: self.previous_close.to_string(),
            change: self.change.to_string(),
            change_percent: self.change_percent.to_string(),
        }
    }
}

const SAMPLE_QUOTES: &[SampleQuote] = &[
    SampleQuote {
        symbol: "AAPL",
        open: "171.1700",
        high: "173.0500",
        low: "170.0600",
        price: "172.6200",
        volume: "121752699",
        previous_close: "171.1300",
        change: "1.4900",
        change_percent: "0.8707%",
    },
    SampleQuote {
        symbol: "GOOGL",
        open: "140.0500",
        high: "142.1700",
        low: "139.1200",
        price: "141.1800",
        volume: "28452110",
        previous_close: "139.9200",
        change: "1.2600",
        change_percent: "0.9005%",
    },
    SampleQuote {
        symbol: "MSFT",
        open: "415.5000",
        high: "420.7000",
        low: "414.2900",
        price: "417.8800",
        volume: "20104692",
        previous_close: "415.1000",
        change: "2.7800",
        change_percent: "0.6697%",
    },
    SampleQuote {
        symbol: "AMZN",
        open: "174.8000",
        high: "178.8000",
        low: "173.9100",
        price: "178.1500",
        volume: "43717010",
        previous_close: "174.4200",
        change: "3.7300",
        change_percent: "2.1385%",
    },
    SampleQuote {
        symbol: "NVDA",
        open: "880.1000",
        high: "910.3000",
        low: "875.0000",
        price: "903.5600",
        volume: "48213425",
        previous_close: "878.3700",
        change: "25.1900",
        change_percent: "2.8678%",
    },
    SampleQuote {
        symbol: "META",
        open: "485.0000",
        high: "494.3000",
        low: "483.1200",
        price: "491.8300",
        volume: "14980233",
        previous_close: "484.1000",
        change: "7.7300",
        change_percent: "1.5968%",
    },
    SampleQuote {
        symbol: "TSLA",
        open: "164.2000",
        high: "171.4400",
        low: "163.1000",
        price: "170.8300",
        volume: "121136838",
        previous_close: "163.5700",
        change: "7.2600",
        change_percent: "4.4385%",
    },
    SampleQuote {
        symbol: "AMD",
        open: "179.5000",
        high: "184.6600",
        low: "178.1000",
        price: "183.2000",
        volume: "60552331",
        previous_close: "179.0000",
        change: "4.2000",
        change_percent: "2.3464%",
    },
    SampleQuote {
        symbol: "PLTR",
        open: "24.0000",
        high: "25.1200",
        low: "23.8000",
        price: "24.8700",
        volume: "71285422",
        previous_close: "23.9500",
        change: "0.9200",
        change_percent: "3.8413%",
    },
    SampleQuote {
        symbol: "SOFI",
        open: "7.5500",
        high: "7.9100",
        low: "7.4800",
        price: "7.8400",
        volume: "40218770",
        previous_close: "7.5200",
        change: "0.3200",
        change_percent: "4.2553%",
    },
    SampleQuote {
        symbol: "IBM",
        open: "191.4000",
        high: "193.8000",
        low: "190.4400",
        price: "193.1500",
        volume: "4366115",
        previous_close: "191.0000",
        change: "2.1500",
        change_percent: "1.1257%",
    },
];

/// Read-only table of sample quotes plus a synthesizer for unknown symbols.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackStore;

impl FallbackStore {
    pub fn new() -> Self {
        Self
    }

    /// Symbols that have a stored sample quote.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        SAMPLE_QUOTES.iter().map(|q| q.symbol)
    }

    pub fn lookup(&self, symbol: &str) -> Option<QuoteRecord> {
        SAMPLE_QUOTES
            .iter()
            .find(|q| q.symbol == symbol)
            .map(SampleQuote::to_record)
    }

    /// Builds a placeholder quote for a symbol without sample data.
    pub fn synthesize(&self, symbol: &str) -> QuoteRecord {
        QuoteRecord {
            symbol: symbol.to_string(),
            open: "100.00".to_string(),
            high: "101.00".to_string(),
            low: "99.00".to_string(),
            price: "100.00".to_string(),
            volume: "1000000".to_string(),
            latest_trading_day: SAMPLE_TRADING_DAY.to_string(),
            previous_close: "100.00".to_string(),
            change: "0.00".to_string(),
            change_percent: "0.00%".to_string(),
        }
    }

    /// Sample quote when one exists, placeholder otherwise. Never fails.
    pub fn resolve(&self, symbol: &str) -> QuoteRecord {
        self.lookup(symbol).unwrap_or_else(|| {
            debug!("No sample quote for {}, synthesizing placeholder", symbol);
            self.synthesize(symbol)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::is_numeric_clean;

    #[test]
    fn test_lookup_returns_requested_symbol() {
        let store = FallbackStore::new();
        for symbol in store.symbols() {
            let record = store.lookup(symbol).unwrap();
            assert_eq!(record.symbol, symbol);
            assert!(is_numeric_clean(&record), "{symbol}");
            assert!(record.change_percent.ends_with('%'));
        }
        assert_eq!(store.symbols().count(), 11);
    }

    #[test]
    fn test_lookup_unknown_symbol() {
        assert!(FallbackStore::new().lookup("ZZZZ").is_none());
        assert!(FallbackStore::new().lookup("aapl").is_none());
    }

    #[test]
    fn test_resolve_synthesizes_unknown_symbol() {
        let record = FallbackStore::new().resolve("ZZZZ");
        assert_eq!(record.symbol, "ZZZZ");
        assert_eq!(record.price, "100.00");
        assert_eq!(record.change_percent, "0.00%");
        assert!(is_numeric_clean(&record));
    }

    #[test]
    fn test_resolve_prefers_sample() {
        let record = FallbackStore::new().resolve("NVDA");
        assert_eq!(record.price, "903.5600");
        assert_eq!(record.latest_trading_day, SAMPLE_TRADING_DAY);
    }
}
