//! Data models for raw price lists and normalized price records.

use serde::{Deserialize, Serialize};

/// One tabular price list as read from disk, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSource {
    /// File name the rows came from (e.g. `price_1.csv`)
    pub file: String,
    /// Column labels in file order
    pub headers: Vec<String>,
    /// Data rows; a row may be shorter than `headers`
    pub rows: Vec<Vec<String>>,
}

impl RawSource {
    /// Creates a raw source from headers and rows.
    pub fn new(file: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { file: file.into(), headers, rows }
    }

    /// Returns the position of a column label.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == label)
    }

    /// Returns the cell at `row`/`column`, if the row is long enough.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column)).map(String::as_str)
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the source has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A normalized product offer with its derived unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Product name as written in the price list
    pub name: String,
    /// Price, never negative
    pub price: f64,
    /// Weight or package size, always positive
    pub weight: f64,
    /// Price list the record came from
    pub source_file: String,
    /// `price / weight`, always finite
    pub price_per_weight: f64,
}

impl PriceRecord {
    /// Builds a record, returning `None` when the values break the record
    /// invariants (negative price, non-positive weight, non-finite unit price).
    pub fn new(
        name: impl Into<String>,
        price: f64,
        weight: f64,
        source_file: impl Into<String>,
    ) -> Option<Self> {
        if !price.is_finite() || !weight.is_finite() || price < 0.0 || weight <= 0.0 {
            return None;
        }

        // `-0` parses as negative zero; fold it so zero prices compare equal
        let price = price + 0.0;
        let price_per_weight = price / weight;
        if !price_per_weight.is_finite() {
            return None;
        }

        Some(Self {
            name: name.into(),
            price,
            weight,
            source_file: source_file.into(),
            price_per_weight,
        })
    }
}
