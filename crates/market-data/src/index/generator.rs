use std::sync::Mutex;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::roster::SECTORS;
use super::store::SampleStore;
use crate::errors::MarketDataError;
use crate::models::{Company, IndexConstituent, IndexDescriptor, SortField, SortOrder};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders a rounded percentage with at least one decimal place (`2.0%`, `-1.37%`).
fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}%")
    } else {
        format!("{value}%")
    }
}

/// Draws random market data for every company of a roster.
pub fn generate_constituents<R: Rng + ?Sized>(
    roster: &[Company],
    rng: &mut R,
) -> Vec<IndexConstituent> {
    roster
        .iter()
        .map(|company| {
            let price = round2(rng.gen_range(20.0..=500.0));
            let change = round2(rng.gen_range(-20.0..=20.0));
            let change_percent = format_percent(round2(change / price * 100.0));
            let volume = rng.gen_range(100_000..=10_000_000u64);
            let shares = rng.gen_range(1_000_000..=1_000_000_000u64);
            let market_cap = round2(price * shares as f64 / 1_000_000_000.0);
            let sector = SECTORS.choose(rng).copied().unwrap_or(SECTORS[0]);

            IndexConstituent {
                symbol: company.symbol.to_string(),
                name: company.name.to_string(),
                price,
                change,
                change_percent,
                volume,
                market_cap,
                sector: sector.to_string(),
            }
        })
        .collect()
}

/// Stable sort on `sort_by`; descending reverses the ascending order.
pub fn sort_constituents(
    constituents: &mut [IndexConstituent],
    sort_by: SortField,
    sort_order: SortOrder,
) {
    constituents.sort_by(|a, b| sort_by.compare(a, b));
    if sort_order == SortOrder::Desc {
        constituents.reverse();
    }
}

/// Produces index constituents from the persisted sample set, generating and
/// persisting a fresh set when none is usable.
pub struct IndexComponentGenerator {
    store: SampleStore,
    rng: Mutex<StdRng>,
}

impl IndexComponentGenerator {
    pub fn new(store: SampleStore) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    pub fn with_rng(store: SampleStore, rng: StdRng) -> Self {
        Self {
            store,
            rng: Mutex::new(rng),
        }
    }

    pub fn components_for(
        &self,
        index_symbol: &str,
        limit: usize,
        sort_by: SortField,
        sort_order: SortOrder,
    ) -> Result<Vec<IndexConstituent>, MarketDataError> {
        let index = IndexDescriptor::find(index_symbol).ok_or_else(|| {
            MarketDataError::NotFound(format!("Index {} not found", index_symbol))
        })?;

        let mut constituents = match self.store.load(index) {
            Ok(Some(constituents)) => constituents,
            Ok(None) => {
                debug!("No sample set for {}, generating", index.symbol);
                self.regenerate(index)
            }
            Err(e) => {
                warn!(
                    "Unreadable sample set for {}: {}, regenerating",
                    index.symbol, e
                );
                self.regenerate(index)
            }
        };

        sort_constituents(&mut constituents, sort_by, sort_order);
        constituents.truncate(limit);
        Ok(constituents)
    }

    fn regenerate(&self, index: &IndexDescriptor) -> Vec<IndexConstituent> {
        let constituents = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            generate_constituents(index.roster, &mut *rng)
        };
        if let Err(e) = self.store.save(index, &constituents) {
            warn!("Failed to persist sample set for {}: {}", index.symbol, e);
        }
        constituents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::roster::{DOW_JONES, SP500};

    fn seeded(dir: &std::path::Path) -> IndexComponentGenerator {
        IndexComponentGenerator::with_rng(SampleStore::new(dir), StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_generated_values_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let constituents = generate_constituents(DOW_JONES, &mut rng);
        assert_eq!(constituents.len(), DOW_JONES.len());

        for c in &constituents {
            assert!((20.0..=500.0).contains(&c.price), "{}", c.price);
            assert!((-20.0..=20.0).contains(&c.change), "{}", c.change);
            assert!((100_000..=10_000_000).contains(&c.volume));
            assert!(c.market_cap >= 0.0 && c.market_cap <= 500.0);
            assert!(SECTORS.contains(&c.sector.as_str()));
            assert_eq!(round2(c.price), c.price);
            assert_eq!(round2(c.change), c.change);
            assert_eq!(round2(c.market_cap), c.market_cap);

            let expected = round2(c.change / c.price * 100.0);
            assert!(c.change_percent.ends_with('%'));
            assert_eq!(c.change_percent_value(), expected);
        }
    }

    #[test]
    fn test_generation_is_deterministic_for_seed() {
        let a = generate_constituents(SP500, &mut StdRng::seed_from_u64(1));
        let b = generate_constituents(SP500, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(2.0), "2.0%");
        assert_eq!(format_percent(-0.0), "-0.0%");
        assert_eq!(format_percent(-1.37), "-1.37%");
        assert_eq!(format_percent(0.5), "0.5%");
    }

    #[test]
    fn test_unknown_index_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = seeded(dir.path())
            .components_for("^FAKE", 20, SortField::MarketCap, SortOrder::Desc)
            .unwrap_err();
        assert!(matches!(err, MarketDataError::NotFound(msg) if msg == "Index ^FAKE not found"));
        assert!(!dir.path().join("FAKE_components.json").exists());
    }

    #[test]
    fn test_sample_set_is_persisted_and_reused() {
        let dir = tempfile::tempdir().unwrap();
        let generator = seeded(dir.path());

        let first = generator
            .components_for("^GSPC", 100, SortField::Symbol, SortOrder::Asc)
            .unwrap();
        assert_eq!(first.len(), SP500.len());
        assert!(dir.path().join("GSPC_components.json").exists());

        let second = generator
            .components_for("^GSPC", 100, SortField::Symbol, SortOrder::Asc)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_small_limit_still_persists_full_roster() {
        let dir = tempfile::tempdir().unwrap();
        let generator = seeded(dir.path());
        let limited = generator
            .components_for("^DJI", 3, SortField::MarketCap, SortOrder::Desc)
            .unwrap();
        assert_eq!(limited.len(), 3);

        let stored = SampleStore::new(dir.path())
            .load(IndexDescriptor::find("^DJI").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(stored.len(), DOW_JONES.len());
    }

    #[test]
    fn test_corrupt_sample_set_is_regenerated() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("RUT_components.json"), "[{]").unwrap();

        let constituents = seeded(dir.path())
            .components_for("^RUT", 100, SortField::MarketCap, SortOrder::Desc)
            .unwrap();
        assert_eq!(constituents.len(), 25);

        let content = std::fs::read_to_string(dir.path().join("RUT_components.json")).unwrap();
        let reparsed: Vec<IndexConstituent> = serde_json::from_str(&content).unwrap();
        assert_eq!(reparsed.len(), 25);
    }

    #[test]
    fn test_desc_is_reverse_of_asc() {
        let dir = tempfile::tempdir().unwrap();
        let generator = seeded(dir.path());
        let desc = generator
            .components_for("^IXIC", 100, SortField::MarketCap, SortOrder::Desc)
            .unwrap();
        let mut asc = generator
            .components_for("^IXIC", 100, SortField::MarketCap, SortOrder::Asc)
            .unwrap();
        asc.reverse();
        assert_eq!(desc, asc);
    }

    #[test]
    fn test_limit_takes_prefix_of_sorted_set() {
        let dir = tempfile::tempdir().unwrap();
        let generator = seeded(dir.path());
        let all = generator
            .components_for("^GSPC", 100, SortField::ChangePercent, SortOrder::Desc)
            .unwrap();
        let five = generator
            .components_for("^GSPC", 5, SortField::ChangePercent, SortOrder::Desc)
            .unwrap();
        assert_eq!(five.as_slice(), &all[..5]);
        assert!(five
            .windows(2)
            .all(|w| w[0].change_percent_value() >= w[1].change_percent_value()));
    }

    #[test]
    fn test_string_fields_sort_lexically() {
        let dir = tempfile::tempdir().unwrap();
        let names: Vec<String> = seeded(dir.path())
            .components_for("^DJI", 100, SortField::Name, SortOrder::Asc)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        let mut expected = names.clone();
        expected.sort();
        assert_eq!(names, expected);
    }
}
