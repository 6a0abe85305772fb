//! HTML export command implementation.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::format::HtmlExporter;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// What an export run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written; holds the path and the row count.
    Written { path: PathBuf, records: usize },
    /// The catalog was empty, nothing was written.
    NoData,
}

impl ExportOutcome {
    /// Returns a message for the user.
    pub fn message(&self) -> String {
        match self {
            ExportOutcome::Written { path, records } => {
                format!("Exported {} records to {}.", records, path.display())
            }
            ExportOutcome::NoData => "No data to export.".to_string(),
        }
    }
}

/// Writes the catalog to an HTML file.
pub struct ExportCommand {
    output: PathBuf,
    exporter: HtmlExporter,
}

impl ExportCommand {
    /// Creates a new export command.
    pub fn new(config: &Config) -> Self {
        Self::with_exporter(config.output.clone(), HtmlExporter::default())
    }

    /// Creates an export command with an explicit destination and exporter.
    pub fn with_exporter(output: PathBuf, exporter: HtmlExporter) -> Self {
        Self { output, exporter }
    }

    /// Renders and writes the document. An empty catalog writes nothing.
    pub fn execute(&self, catalog: &Catalog) -> Result<ExportOutcome> {
        let Some(html) = self.exporter.render(catalog) else {
            info!("Catalog is empty, skipping export");
            return Ok(ExportOutcome::NoData);
        };

        debug!("Writing {} bytes to {}", html.len(), self.output.display());
        std::fs::write(&self.output, html)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        info!("Exported {} records to {}", catalog.len(), self.output.display());
        Ok(ExportOutcome::Written { path: self.output.clone(), records: catalog.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceRecord;
    use tempfile::TempDir;

    fn make_command(dir: &TempDir) -> ExportCommand {
        let config = Config { output: dir.path().join("output.html"), ..Config::default() };
        ExportCommand::new(&config)
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let catalog =
            Catalog::build(vec![vec![PriceRecord::new("Milk 1L", 90.0, 1.0, "price1.csv").unwrap()]]);

        let outcome = make_command(&dir).execute(&catalog).unwrap();
        let path = dir.path().join("output.html");
        assert_eq!(outcome, ExportOutcome::Written { path: path.clone(), records: 1 });

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("<td>Milk 1L</td>"));
        assert!(outcome.message().starts_with("Exported 1 records to"));
    }

    #[test]
    fn test_export_empty_catalog_writes_nothing() {
        let dir = TempDir::new().unwrap();

        let outcome = make_command(&dir).execute(&Catalog::default()).unwrap();
        assert_eq!(outcome, ExportOutcome::NoData);
        assert_eq!(outcome.message(), "No data to export.");
        assert!(!dir.path().join("output.html").exists());
    }

    #[test]
    fn test_export_overwrites_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.html");
        std::fs::write(&path, "stale").unwrap();

        let catalog =
            Catalog::build(vec![vec![PriceRecord::new("Tea", 120.0, 0.1, "price.csv").unwrap()]]);
        make_command(&dir).execute(&catalog).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(!html.contains("stale"));
        assert!(html.contains("<td>Tea</td>"));
    }

    #[test]
    fn test_export_unwritable_destination() {
        let dir = TempDir::new().unwrap();
        let command = ExportCommand::with_exporter(
            dir.path().join("missing").join("output.html"),
            HtmlExporter::default(),
        );
        let catalog =
            Catalog::build(vec![vec![PriceRecord::new("Tea", 120.0, 0.1, "price.csv").unwrap()]]);

        let err = command.execute(&catalog).unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
