//! Search command implementation.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::format::Formatter;
use tracing::debug;

/// Searches the catalog by product name and formats the result.
pub struct SearchCommand {
    formatter: Formatter,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: &Config) -> Self {
        Self { formatter: Formatter::new(config.format) }
    }

    /// Executes the search and returns formatted output.
    ///
    /// A query without matches yields a "no results" message, never an error.
    pub fn execute(&self, catalog: &Catalog, query: &str) -> String {
        let outcome = catalog.lookup(query);
        debug!("Query {:?} matched {} records", query.trim(), outcome.records().len());

        self.formatter.format_outcome(&outcome, query)
    }
}
