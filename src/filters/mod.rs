//! Record filtering used by catalog queries.

pub mod name;

use crate::catalog::PriceRecord;

pub use name::NameFilter;

/// Trait for filtering price records.
pub trait Filter {
    /// Returns true if the record passes the filter.
    fn matches(&self, record: &PriceRecord) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}
