//! Column resolution: maps loosely-named price list headers onto logical fields.

use serde::{Deserialize, Serialize};

/// Logical field every price list must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Price,
    Weight,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Price => write!(f, "price"),
            Field::Weight => write!(f, "weight"),
        }
    }
}

/// Accepted header labels per logical field, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSynonymTable {
    #[serde(default = "default_name_labels")]
    pub name: Vec<String>,

    #[serde(default = "default_price_labels")]
    pub price: Vec<String>,

    #[serde(default = "default_weight_labels")]
    pub weight: Vec<String>,
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn default_name_labels() -> Vec<String> {
    labels(&["название", "товар", "наименование", "продукт"])
}

fn default_price_labels() -> Vec<String> {
    labels(&["цена", "розница"])
}

fn default_weight_labels() -> Vec<String> {
    labels(&["вес", "фасовка", "масса"])
}

impl Default for ColumnSynonymTable {
    fn default() -> Self {
        Self {
            name: default_name_labels(),
            price: default_price_labels(),
            weight: default_weight_labels(),
        }
    }
}

impl ColumnSynonymTable {
    /// Returns the candidate labels for a field.
    pub fn candidates(&self, field: Field) -> &[String] {
        match field {
            Field::Name => &self.name,
            Field::Price => &self.price,
            Field::Weight => &self.weight,
        }
    }
}

/// How header labels are compared against candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMatching {
    /// Byte-for-byte comparison.
    #[default]
    Exact,
    /// Trim surrounding whitespace and compare case-insensitively.
    Normalized,
}

impl LabelMatching {
    /// Returns true if a header label matches a candidate.
    pub fn matches(self, label: &str, candidate: &str) -> bool {
        match self {
            LabelMatching::Exact => label == candidate,
            LabelMatching::Normalized => {
                label.trim().to_lowercase() == candidate.trim().to_lowercase()
            }
        }
    }
}

impl std::str::FromStr for LabelMatching {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(LabelMatching::Exact),
            "normalized" => Ok(LabelMatching::Normalized),
            _ => Err(format!("Unknown label matching: {}. Use: exact, normalized", s)),
        }
    }
}

impl std::fmt::Display for LabelMatching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelMatching::Exact => write!(f, "exact"),
            LabelMatching::Normalized => write!(f, "normalized"),
        }
    }
}

/// Picks the first candidate present among the available labels.
///
/// Candidate order decides priority, not label order. The returned value is
/// the label as it appears in `labels`, so callers can look the column up.
pub fn resolve<'a>(
    labels: &'a [String],
    candidates: &[String],
    matching: LabelMatching,
) -> Option<&'a str> {
    candidates.iter().find_map(|candidate| {
        labels.iter().find(|label| matching.matches(label, candidate)).map(String::as_str)
    })
}

/// Header labels chosen for each logical field of one price list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub name: String,
    pub price: String,
    pub weight: String,
}

/// Resolves all logical fields, or reports every field that has no match.
pub fn resolve_all(
    labels: &[String],
    table: &ColumnSynonymTable,
    matching: LabelMatching,
) -> Result<ResolvedColumns, Vec<Field>> {
    let name = resolve(labels, table.candidates(Field::Name), matching);
    let price = resolve(labels, table.candidates(Field::Price), matching);
    let weight = resolve(labels, table.candidates(Field::Weight), matching);

    match (name, price, weight) {
        (Some(name), Some(price), Some(weight)) => Ok(ResolvedColumns {
            name: name.to_string(),
            price: price.to_string(),
            weight: weight.to_string(),
        }),
        found => {
            let missing = [(Field::Name, found.0), (Field::Price, found.1), (Field::Weight, found.2)]
                .into_iter()
                .filter(|(_, label)| label.is_none())
                .map(|(field, _)| field)
                .collect();
            Err(missing)
        }
    }
}
