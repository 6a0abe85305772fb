//! Error types for loading price lists.

use super::columns::Field;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a single price list is skipped. Never fatal for the whole load.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be opened or parsed as CSV.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file has no data rows.
    #[error("file is empty")]
    Empty,

    /// One or more logical fields have no matching header.
    #[error("required columns not found: {}", format_fields(.missing))]
    MissingColumns { missing: Vec<Field> },

    /// Every row had an invalid price or weight.
    #[error("all {dropped} rows were dropped due to invalid price or weight")]
    NoUsableRows { dropped: usize },
}

fn format_fields(fields: &[Field]) -> String {
    fields.iter().map(Field::to_string).collect::<Vec<_>>().join(", ")
}

/// Errors that stop the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data directory does not exist or is not a directory.
    #[error("data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The data directory could not be listed.
    #[error("failed to read data directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
