//! Normalization of raw price lists into price records.

use super::columns::{resolve_all, ColumnSynonymTable, LabelMatching};
use super::error::SourceError;
use super::models::{PriceRecord, RawSource};
use tracing::debug;

/// Best-effort numeric coercion of a cell.
///
/// Surrounding whitespace is ignored. Empty, non-numeric and non-finite
/// cells yield `None`.
pub fn coerce_number(cell: &str) -> Option<f64> {
    let value: f64 = cell.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Records produced from one source, plus the count of rejected rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub records: Vec<PriceRecord>,
    pub dropped: usize,
}

/// Turns raw sources into price records using a synonym table.
#[derive(Debug, Clone, Default)]
pub struct RecordNormalizer {
    synonyms: ColumnSynonymTable,
    matching: LabelMatching,
}

impl RecordNormalizer {
    /// Creates a normalizer.
    pub fn new(synonyms: ColumnSynonymTable, matching: LabelMatching) -> Self {
        Self { synonyms, matching }
    }

    /// Normalizes one source.
    ///
    /// Rows with a non-numeric price or weight, a negative price or a
    /// non-positive weight are dropped before the unit price is computed.
    pub fn normalize(&self, source: &RawSource) -> Result<Normalized, SourceError> {
        let columns = resolve_all(&source.headers, &self.synonyms, self.matching)
            .map_err(|missing| SourceError::MissingColumns { missing })?;

        debug!(
            "{}: name={:?} price={:?} weight={:?}",
            source.file, columns.name, columns.price, columns.weight
        );

        // Resolved labels always come from the header list
        let index = |label: &str| source.column_index(label).unwrap_or_default();
        let (name_idx, price_idx, weight_idx) =
            (index(&columns.name), index(&columns.price), index(&columns.weight));

        let mut records = Vec::with_capacity(source.row_count());
        let mut dropped = 0;

        for row in 0..source.row_count() {
            let price = source.cell(row, price_idx).and_then(coerce_number);
            let weight = source.cell(row, weight_idx).and_then(coerce_number);

            let record = match (price, weight) {
                (Some(price), Some(weight)) => {
                    let name = source.cell(row, name_idx).unwrap_or_default();
                    PriceRecord::new(name, price, weight, source.file.as_str())
                }
                _ => None,
            };

            match record {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }

        if records.is_empty() {
            return Err(SourceError::NoUsableRows { dropped });
        }

        debug!("{}: kept {} rows, dropped {}", source.file, records.len(), dropped);

        Ok(Normalized { records, dropped })
    }
}
