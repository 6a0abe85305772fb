//! Case-insensitive substring match on product names.

use super::Filter;
use crate::catalog::PriceRecord;

/// Matches records whose name contains a query string.
pub struct NameFilter {
    /// Trimmed, lowercased query.
    needle: String,
}

impl NameFilter {
    /// Creates a filter. Surrounding whitespace in `query` is ignored, so an
    /// empty or blank query matches every record.
    pub fn new(query: &str) -> Self {
        Self { needle: query.trim().to_lowercase() }
    }
}

impl Filter for NameFilter {
    fn matches(&self, record: &PriceRecord) -> bool {
        record.name.to_lowercase().contains(&self.needle)
    }

    fn description(&self) -> String {
        if self.needle.is_empty() {
            "Name: any".to_string()
        } else {
            format!("Name contains: {}", self.needle)
        }
    }
}
