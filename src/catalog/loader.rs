//! Price list discovery and loading with per-file isolation.

use super::error::{LoadError, SourceError};
use super::models::RawSource;
use super::normalizer::RecordNormalizer;
use super::Catalog;
use crate::config::Config;
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Lists price list files in a directory.
///
/// A file qualifies when its name contains `pattern` and its extension is
/// exactly `extension`. Files are returned sorted by name.
pub fn discover_sources(
    dir: &Path,
    pattern: &str,
    extension: &str,
) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound { path: dir.to_path_buf() });
    }

    let entries = std::fs::read_dir(dir)
        .map_err(|source| LoadError::DirectoryRead { path: dir.to_path_buf(), source })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|source| LoadError::DirectoryRead { path: dir.to_path_buf(), source })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let has_extension = path.extension().and_then(|e| e.to_str()) == Some(extension);

        if name.contains(pattern) && has_extension {
            files.push(path);
        }
    }

    files.sort();
    debug!("Discovered {} price lists in {}", files.len(), dir.display());
    Ok(files)
}

/// Reads one comma-separated price list with a header row.
pub fn read_source(path: &Path) -> Result<RawSource, SourceError> {
    let read_err = |source: csv::Error| SourceError::Read { path: path.to_path_buf(), source };

    let mut reader =
        ReaderBuilder::new().has_headers(true).flexible(true).from_path(path).map_err(read_err)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(read_err)?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_err)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let raw = RawSource::new(file_name(path), headers, rows);
    if raw.is_empty() {
        return Err(SourceError::Empty);
    }

    Ok(raw)
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Outcome of loading one price list.
#[derive(Debug)]
pub enum SourceStatus {
    Loaded { records: usize, dropped: usize },
    Skipped(SourceError),
}

/// Per-file load summary.
#[derive(Debug)]
pub struct SourceReport {
    pub file: String,
    pub status: SourceStatus,
}

impl SourceReport {
    /// Renders the report as a one-line diagnostic.
    pub fn diagnostic(&self) -> String {
        match &self.status {
            SourceStatus::Loaded { records, dropped: 0 } => {
                format!("Loaded {} records from {}", records, self.file)
            }
            SourceStatus::Loaded { records, dropped } => {
                format!(
                    "Loaded {} records from {} ({} invalid rows dropped)",
                    records, self.file, dropped
                )
            }
            SourceStatus::Skipped(err) => format!("Skipped {}: {}", self.file, err),
        }
    }

    /// Returns true if the file contributed records.
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, SourceStatus::Loaded { .. })
    }
}

/// A freshly built catalog plus what happened to every file.
#[derive(Debug)]
pub struct LoadReport {
    pub catalog: Catalog,
    pub sources: Vec<SourceReport>,
}

impl LoadReport {
    /// Returns one diagnostic line per discovered file.
    pub fn diagnostics(&self) -> Vec<String> {
        self.sources.iter().map(SourceReport::diagnostic).collect()
    }

    /// Returns the number of files that contributed records.
    pub fn loaded_count(&self) -> usize {
        self.sources.iter().filter(|s| s.is_loaded()).count()
    }
}

/// Loads every price list in a directory into a catalog.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    normalizer: RecordNormalizer,
    pattern: String,
    extension: String,
}

impl CatalogLoader {
    /// Creates a loader.
    pub fn new(
        normalizer: RecordNormalizer,
        pattern: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self { normalizer, pattern: pattern.into(), extension: extension.into() }
    }

    /// Creates a loader from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            RecordNormalizer::new(config.columns.clone(), config.label_matching),
            config.file_pattern.clone(),
            config.extension.clone(),
        )
    }

    /// Builds a catalog from all price lists in `dir`.
    ///
    /// Only an unreadable directory is an error; a bad file is reported in
    /// the returned `LoadReport` and the remaining files are still loaded.
    pub fn load(&self, dir: &Path) -> Result<LoadReport, LoadError> {
        let paths = discover_sources(dir, &self.pattern, &self.extension)?;

        let mut batches = Vec::with_capacity(paths.len());
        let mut sources = Vec::with_capacity(paths.len());

        for path in &paths {
            let file = file_name(path);
            let result = read_source(path).and_then(|raw| self.normalizer.normalize(&raw));

            let status = match result {
                Ok(normalized) => {
                    info!("Loaded {} records from {}", normalized.records.len(), file);
                    let status = SourceStatus::Loaded {
                        records: normalized.records.len(),
                        dropped: normalized.dropped,
                    };
                    batches.push(normalized.records);
                    status
                }
                Err(err) => {
                    info!("Skipping {}: {}", file, err);
                    SourceStatus::Skipped(err)
                }
            };

            sources.push(SourceReport { file, status });
        }

        Ok(LoadReport { catalog: Catalog::build(batches), sources })
    }
}
