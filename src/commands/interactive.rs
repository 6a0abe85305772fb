//! Interactive search loop.

use super::SearchCommand;
use crate::catalog::Catalog;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "Search (type 'exit' to quit): ";

/// Read-eval loop that prompts for queries until `exit` or end of input.
pub struct InteractiveSession<'a> {
    catalog: &'a Catalog,
    search: SearchCommand,
}

impl<'a> InteractiveSession<'a> {
    /// Creates a session over a loaded catalog.
    pub fn new(catalog: &'a Catalog, search: SearchCommand) -> Self {
        Self { catalog, search }
    }

    /// Runs the loop. Returns normally on `exit` (any case) or end of input.
    pub fn run(&self, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
        let mut buf = Vec::new();

        loop {
            write!(output, "{}", PROMPT).context("Failed to write prompt")?;
            output.flush().context("Failed to flush output")?;

            buf.clear();
            let read = input.read_until(b'\n', &mut buf).context("Failed to read input")?;
            if read == 0 {
                debug!("End of input, leaving search loop");
                writeln!(output)?;
                break;
            }

            // Undecodable bytes are replaced rather than rejected
            let line = String::from_utf8_lossy(&buf);
            let query = line.trim();

            if query.eq_ignore_ascii_case("exit") {
                writeln!(output, "Done.")?;
                break;
            }

            writeln!(output, "{}", self.search.execute(self.catalog, query))?;
        }

        Ok(())
    }
}
