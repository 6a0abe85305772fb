//! price-machine - Merge CSV price lists and compare products by unit price
//!
//! Loads every price list in a directory, maps loosely-named columns onto
//! name/price/weight, and exposes the merged catalog for HTML export and
//! name search.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod filters;
pub mod format;

pub use catalog::{Catalog, CatalogLoader, PriceRecord, SearchOutcome};
pub use config::Config;
