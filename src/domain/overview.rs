use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Reserved label carrying the month's budget amount.
pub const BUDGET_LABEL: &str = "budget";
/// Reserved label whose cell nests recurring subcategory totals.
pub const RECURRING_LABEL: &str = "Recurring";

/// One cell of the overview matrix.
///
/// The backend mixes plain numbers, stringified decimals, nulls, and (under
/// the `Recurring` label) a nested map. Anything that does not read as a
/// number counts as zero; the overview path must never fail on dirty data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Nested(HashMap<String, CellValue>),
    Other(serde_json::Value),
}

impl CellValue {
    /// Numeric reading of the cell; absent or unparseable data is zero.
    pub fn amount(&self) -> f64 {
        match self {
            CellValue::Number(value) if value.is_finite() => *value,
            CellValue::Text(text) => text.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// The nested map under a `Recurring` cell, when present.
    pub fn nested(&self) -> Option<&HashMap<String, CellValue>> {
        match self {
            CellValue::Nested(map) => Some(map),
            _ => None,
        }
    }
}

/// Per-month label-to-cell mapping.
pub type MonthCells = HashMap<String, CellValue>;

/// Raw payload of `reports/overview-data/`. Months are `YYYY-MM` labels and
/// arrive pre-sorted; `monthly_data` keys each month to its cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OverviewData {
    pub months: Vec<String>,
    pub monthly_data: HashMap<String, MonthCells>,
}
