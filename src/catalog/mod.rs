//! Price catalog: column resolution, normalization, loading and queries.

pub mod columns;
pub mod error;
pub mod loader;
pub mod models;
pub mod normalizer;

use crate::filters::{Filter, NameFilter};
use tracing::debug;

pub use columns::{resolve, ColumnSynonymTable, Field, LabelMatching};
pub use error::{LoadError, SourceError};
pub use loader::{CatalogLoader, LoadReport, SourceReport, SourceStatus};
pub use models::{PriceRecord, RawSource};
pub use normalizer::{Normalized, RecordNormalizer};

/// All normalized records of one load, in source order.
///
/// A catalog is built once per load and never mutated; reloading builds a
/// new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<PriceRecord>,
}

impl Catalog {
    /// Concatenates per-source batches in the order given. Identical names
    /// from different files are kept as separate records.
    pub fn build(batches: impl IntoIterator<Item = Vec<PriceRecord>>) -> Self {
        Self { records: batches.into_iter().flatten().collect() }
    }

    /// Returns records in insertion order.
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all records sorted by ascending unit price.
    ///
    /// The sort is stable: equal unit prices keep insertion order.
    pub fn sorted_by_unit_price(&self) -> Vec<PriceRecord> {
        sort_by_unit_price(self.records.clone())
    }

    /// Returns records whose name contains `query`, ignoring case and the
    /// query's surrounding whitespace, sorted by ascending unit price.
    pub fn search(&self, query: &str) -> Vec<PriceRecord> {
        self.filter(&NameFilter::new(query))
    }

    /// Returns records passing `filter`, sorted by ascending unit price.
    pub fn filter(&self, filter: &dyn Filter) -> Vec<PriceRecord> {
        debug!("Filtering {} records by {}", self.records.len(), filter.description());
        let matches = self.records.iter().filter(|r| filter.matches(r)).cloned().collect();
        sort_by_unit_price(matches)
    }

    /// Runs a search and tags the result as empty or found.
    pub fn lookup(&self, query: &str) -> SearchOutcome {
        SearchOutcome::from(self.search(query))
    }
}

fn sort_by_unit_price(mut records: Vec<PriceRecord>) -> Vec<PriceRecord> {
    records.sort_by(|a, b| a.price_per_weight.total_cmp(&b.price_per_weight));
    records
}

/// Result of a name search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Nothing matched.
    Empty,
    /// At least one record matched, sorted by ascending unit price.
    Found(Vec<PriceRecord>),
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::Empty)
    }

    /// Returns the matched records (empty slice for `Empty`).
    pub fn records(&self) -> &[PriceRecord] {
        match self {
            SearchOutcome::Empty => &[],
            SearchOutcome::Found(records) => records,
        }
    }
}

impl From<Vec<PriceRecord>> for SearchOutcome {
    fn from(records: Vec<PriceRecord>) -> Self {
        if records.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Found(records)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(name: &str, price: f64, weight: f64, file: &str) -> PriceRecord {
        PriceRecord::new(name, price, weight, file).unwrap()
    }

    fn sample_catalog() -> Catalog {
        Catalog::build(vec![
            vec![
                record("Milk 1L", 90.0, 1.0, "price1.csv"),
                record("Butter", 200.0, 0.5, "price1.csv"),
            ],
            vec![],
            vec![
                record("Milk 1L", 95.0, 1.0, "price2.csv"),
                record("Oat milk", 180.0, 2.0, "price2.csv"),
            ],
        ])
    }

    #[test]
    fn test_build_concatenates_in_source_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 4);

        let files: Vec<_> = catalog.records().iter().map(|r| r.source_file.as_str()).collect();
        assert_eq!(files, vec!["price1.csv", "price1.csv", "price2.csv", "price2.csv"]);

        // No merging of identical names across files
        let milk = catalog.records().iter().filter(|r| r.name == "Milk 1L").count();
        assert_eq!(milk, 2);
    }

    #[test]
    fn test_sorted_by_unit_price() {
        let sorted = sample_catalog().sorted_by_unit_price();
        let unit_prices: Vec<_> = sorted.iter().map(|r| r.price_per_weight).collect();
        assert_eq!(unit_prices, vec![90.0, 90.0, 95.0, 400.0]);
    }

    #[test]
    fn test_sorted_by_unit_price_is_stable() {
        let sorted = sample_catalog().sorted_by_unit_price();
        // "Milk 1L" from price1.csv and "Oat milk" both cost 90 per unit
        assert_eq!(sorted[0].name, "Milk 1L");
        assert_eq!(sorted[0].source_file, "price1.csv");
        assert_eq!(sorted[1].name, "Oat milk");
    }

    #[test]
    fn test_sorted_leaves_catalog_untouched() {
        let catalog = sample_catalog();
        let before = catalog.clone();
        let _ = catalog.sorted_by_unit_price();
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_search_case_insensitive() {
        let catalog = sample_catalog();
        let upper = catalog.search("MILK");
        let lower = catalog.search("milk");

        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 3);
        assert_eq!(upper[0].price_per_weight, 90.0);
        assert_eq!(upper[2].price_per_weight, 95.0);
    }

    #[test]
    fn test_search_trims_query() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("  butter \n").len(), 1);
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("").len(), 4);
        assert_eq!(catalog.search("   ").len(), 4);
    }

    #[test]
    fn test_search_cyrillic() {
        let catalog = Catalog::build(vec![vec![record("Молоко 3,2%", 89.0, 1.0, "price.csv")]]);
        assert_eq!(catalog.search("МОЛОКО").len(), 1);
        assert!(catalog.search("кефир").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.sorted_by_unit_price().is_empty());
        assert!(catalog.search("anything").is_empty());
        assert_eq!(catalog.lookup("anything"), SearchOutcome::Empty);
    }

    #[test]
    fn test_sorted_zero_and_negative_zero_keep_order() {
        let catalog = Catalog::build(vec![vec![
            record("First free", 0.0, 1.0, "price.csv"),
            record("Second free", -0.0, 1.0, "price.csv"),
        ]]);

        let names: Vec<_> =
            catalog.sorted_by_unit_price().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["First free", "Second free"]);
    }

    #[test]
    fn test_lookup_outcome() {
        let catalog = sample_catalog();

        let outcome = catalog.lookup("butter");
        assert!(!outcome.is_empty());
        assert_eq!(outcome.records().len(), 1);

        let outcome = catalog.lookup("caviar");
        assert!(outcome.is_empty());
        assert!(outcome.records().is_empty());
    }

    proptest! {
        #[test]
        fn prop_sorted_is_monotonic_and_stable(
            items in proptest::collection::vec((0u32..50, 1u32..5), 0..40)
        ) {
            let records: Vec<_> = items
                .iter()
                .enumerate()
                .map(|(i, (price, weight))| {
                    record(&format!("item {i}"), *price as f64, *weight as f64, "p.csv")
                })
                .collect();
            let sorted = Catalog::build(vec![records]).sorted_by_unit_price();

            for pair in sorted.windows(2) {
                prop_assert!(pair[0].price_per_weight <= pair[1].price_per_weight);
                if pair[0].price_per_weight == pair[1].price_per_weight {
                    let index = |r: &PriceRecord| r.name[5..].parse::<usize>().unwrap();
                    prop_assert!(index(&pair[0]) < index(&pair[1]));
                }
            }
        }

        #[test]
        fn prop_search_ignores_case(query in "[a-zA-Z ]{0,4}") {
            let catalog = sample_catalog();
            prop_assert_eq!(
                catalog.search(&query.to_uppercase()),
                catalog.search(&query.to_lowercase())
            );
        }
    }
}
