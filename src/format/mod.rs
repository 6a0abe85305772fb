//! Output formatting for search results (table, JSON, markdown, CSV) and
//! the HTML catalog export.

pub mod html;

use crate::catalog::{PriceRecord, SearchOutcome};
use crate::config::OutputFormat;

pub use html::HtmlExporter;

const CSV_HEADERS: [&str; 5] = ["name", "price", "weight", "source_file", "price_per_weight"];

/// Renders a price or weight without a trailing `.0` for whole numbers.
pub(crate) fn display_number(value: f64) -> String {
    value.to_string()
}

/// Formats price records for terminal output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a search outcome; an empty outcome becomes a short message
    /// in every format.
    pub fn format_outcome(&self, outcome: &SearchOutcome, query: &str) -> String {
        match outcome {
            SearchOutcome::Empty => format!("No products match \"{}\".", query.trim()),
            SearchOutcome::Found(records) => self.format_records(records),
        }
    }

    /// Formats records in the given order.
    pub fn format_records(&self, records: &[PriceRecord]) -> String {
        match self.format {
            OutputFormat::Json => self.json_records(records),
            OutputFormat::Table => self.table_records(records),
            OutputFormat::Markdown => self.markdown_records(records),
            OutputFormat::Csv => self.csv_records(records),
        }
    }

    // JSON formatting

    fn json_records(&self, records: &[PriceRecord]) -> String {
        serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_records(&self, records: &[PriceRecord]) -> String {
        let max_name_width = 50;

        let rows: Vec<[String; 5]> = records
            .iter()
            .map(|r| {
                [
                    truncate(&r.name, max_name_width),
                    display_number(r.price),
                    display_number(r.weight),
                    r.source_file.clone(),
                    format!("{:.2}", r.price_per_weight),
                ]
            })
            .collect();

        let headers = ["Name", "Price", "Weight", "File", "Price per kg"];
        let mut widths = headers.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let [name_w, price_w, weight_w, file_w, unit_w] = widths;

        let mut lines = Vec::with_capacity(rows.len() + 4);

        lines.push(format!(
            "{:<name_w$}  {:>price_w$}  {:>weight_w$}  {:<file_w$}  {:>unit_w$}",
            headers[0], headers[1], headers[2], headers[3], headers[4]
        ));
        lines.push(format!(
            "{:-<name_w$}  {:-<price_w$}  {:-<weight_w$}  {:-<file_w$}  {:-<unit_w$}",
            "", "", "", "", ""
        ));

        for [name, price, weight, file, unit] in &rows {
            lines.push(format!(
                "{:<name_w$}  {:>price_w$}  {:>weight_w$}  {:<file_w$}  {:>unit_w$}",
                name, price, weight, file, unit
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", records.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_records(&self, records: &[PriceRecord]) -> String {
        let mut lines = Vec::new();

        lines.push("| Name | Price | Weight | File | Price per kg |".to_string());
        lines.push("|------|-------|--------|------|--------------|".to_string());

        for record in records {
            lines.push(format!(
                "| {} | {} | {} | {} | {:.2} |",
                record.name.replace('|', "\\|"),
                display_number(record.price),
                display_number(record.weight),
                record.source_file.replace('|', "\\|"),
                record.price_per_weight
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", records.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_records(&self, records: &[PriceRecord]) -> String {
        Self::write_csv(records).unwrap_or_else(|_| CSV_HEADERS.join(","))
    }

    fn write_csv(records: &[PriceRecord]) -> anyhow::Result<String> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(Vec::new());
        writer.write_record(CSV_HEADERS)?;
        for record in records {
            writer.serialize(record)?;
        }

        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes)?.trim_end().to_string())
    }
}

/// Shortens `text` to at most `max` characters, marking the cut with `...`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
