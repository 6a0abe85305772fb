//! Static HTML export of the whole catalog.

use super::display_number;
use crate::catalog::Catalog;
use std::fmt::Write;

const STYLESHEET: &str = "\
        table {
            width: 100%;
            border-collapse: collapse;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
        }
        th {
            background-color: #f2f2f2;
        }";

/// Renders the catalog as a single HTML document, sorted by unit price.
pub struct HtmlExporter {
    title: String,
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new("Prices")
    }
}

impl HtmlExporter {
    /// Creates an exporter with a page title.
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    /// Returns the document, or `None` for an empty catalog.
    pub fn render(&self, catalog: &Catalog) -> Option<String> {
        if catalog.is_empty() {
            return None;
        }

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("    <meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "    <title>{}</title>", escape(&self.title));
        let _ = writeln!(html, "    <style>\n{}\n    </style>", STYLESHEET);
        html.push_str("</head>\n<body>\n    <table>\n");
        html.push_str(
            "        <tr>\n            <th>No.</th>\n            <th>Name</th>\n            \
             <th>Price</th>\n            <th>Weight</th>\n            <th>File</th>\n            \
             <th>Price per kg</th>\n        </tr>\n",
        );

        for (idx, record) in catalog.sorted_by_unit_price().iter().enumerate() {
            let _ = write!(
                html,
                "        <tr>\n            <td>{}</td>\n            <td>{}</td>\n            \
                 <td>{}</td>\n            <td>{}</td>\n            <td>{}</td>\n            \
                 <td>{:.2}</td>\n        </tr>\n",
                idx + 1,
                escape(&record.name),
                display_number(record.price),
                display_number(record.weight),
                escape(&record.source_file),
                record.price_per_weight
            );
        }

        html.push_str("    </table>\n</body>\n</html>\n");
        Some(html)
    }
}

/// Escapes text for use in HTML element content.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceRecord;

    fn make_catalog() -> Catalog {
        Catalog::build(vec![
            vec![
                PriceRecord::new("Cheese", 500.0, 0.5, "price_1.csv").unwrap(),
                PriceRecord::new("Milk 1L", 90.0, 1.0, "price_1.csv").unwrap(),
            ],
            vec![PriceRecord::new("Salt <fine>", 30.0, 1.5, "price_2.csv").unwrap()],
        ])
    }

    #[test]
    fn test_render_empty_catalog() {
        assert!(HtmlExporter::default().render(&Catalog::default()).is_none());
    }

    #[test]
    fn test_render_document_structure() {
        let html = HtmlExporter::default().render(&make_catalog()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Prices</title>"));
        assert!(html.contains("border-collapse: collapse;"));
        assert!(html.contains("<th>Price per kg</th>"));
        assert_eq!(html.matches("<tr>").count(), 4);
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_render_rows_sorted_and_numbered() {
        let html = HtmlExporter::default().render(&make_catalog()).unwrap();

        let salt = html.find("Salt").unwrap();
        let milk = html.find("Milk 1L").unwrap();
        let cheese = html.find("Cheese").unwrap();
        assert!(salt < milk && milk < cheese);

        assert!(html.contains("<td>1</td>\n            <td>Salt &lt;fine&gt;</td>"));
        assert!(html.contains("<td>3</td>\n            <td>Cheese</td>"));
    }

    #[test]
    fn test_render_number_formatting() {
        let html = HtmlExporter::default().render(&make_catalog()).unwrap();

        assert!(html.contains("<td>20.00</td>"));
        assert!(html.contains("<td>90.00</td>"));
        assert!(html.contains("<td>1000.00</td>"));
        assert!(html.contains("<td>1.5</td>"));
        assert!(html.contains("<td>500</td>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Fish & Chips"), "Fish &amp; Chips");
        assert_eq!(escape("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
        assert_eq!(escape("Tom's"), "Tom&#39;s");
        assert_eq!(escape("Сыр"), "Сыр");
    }

    #[test]
    fn test_custom_title() {
        let html = HtmlExporter::new("Цены & скидки").render(&make_catalog()).unwrap();
        assert!(html.contains("<title>Цены &amp; скидки</title>"));
    }
}
