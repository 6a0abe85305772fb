//! Configuration management with TOML files and CLI overrides.

use crate::catalog::{ColumnSynonymTable, LabelMatching};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the price lists (default: `data` next to the executable)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// HTML export destination
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Substring a price list file name must contain
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,

    /// Required file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// How header labels are compared against synonyms
    #[serde(default)]
    pub label_matching: LabelMatching,

    /// Output format for search results
    #[serde(default)]
    pub format: OutputFormat,

    /// Accepted header labels per logical field
    #[serde(default)]
    pub columns: ColumnSynonymTable,
}

fn default_output() -> PathBuf {
    PathBuf::from("output.html")
}

fn default_file_pattern() -> String {
    "price".to_string()
}

fn default_extension() -> String {
    "csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            output: default_output(),
            file_pattern: default_file_pattern(),
            extension: default_extension(),
            label_matching: LabelMatching::Exact,
            format: OutputFormat::Table,
            columns: ColumnSynonymTable::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads the file given with `--config`, or the built-in defaults.
    ///
    /// No file is picked up implicitly, so a run without flags always uses
    /// the defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match explicit_path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns the price list directory, falling back to `data` next to the
    /// running executable.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let base = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(base.join("data"))
    }
}

/// Output format for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
