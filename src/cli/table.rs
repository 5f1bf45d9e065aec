//! Plain-text renderer for the monthly overview table.

use crate::domain::OverviewData;
use crate::overview::{budget_amount, cell_amount, recurring_amount, OverviewSummary};

const LABEL_HEADER: &str = "Month";
const REMAINING_LABEL: &str = "REMAINING";
const RECURRING_SECTION: &str = "Recurring Expenses";
const VARIABLE_SECTION: &str = "Variable Expenses";

/// Renders the overview matrix: one column per month, a budget row, the
/// recurring and variable expense sections, and the remaining balance row.
/// Every missing cell shows as 0.
pub fn render_overview(data: &OverviewData, summary: &OverviewSummary) -> String {
    let mut rows: Vec<Row> = Vec::new();
    rows.push(Row::header(data));
    rows.push(Row::amounts("Budget", data, |d, m| budget_amount(d, m)));

    rows.push(Row::section(RECURRING_SECTION));
    for label in &summary.recurring_labels {
        rows.push(Row::amounts(label, data, |d, m| recurring_amount(d, m, label)));
    }

    rows.push(Row::section(VARIABLE_SECTION));
    for category in &summary.categories {
        rows.push(Row::amounts(category, data, |d, m| cell_amount(d, m, category)));
    }

    let mut remaining = Row::new(REMAINING_LABEL);
    for month in &data.months {
        let value = summary.remaining.get(month).copied().unwrap_or(0);
        remaining.cells.push(group_thousands(&value.to_string()));
    }
    rows.push(remaining);

    layout(&rows, data.months.len())
}

struct Row {
    label: String,
    cells: Vec<String>,
    section: bool,
}

impl Row {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            cells: Vec::new(),
            section: false,
        }
    }

    fn header(data: &OverviewData) -> Self {
        let mut row = Row::new(LABEL_HEADER);
        row.cells = data.months.clone();
        row
    }

    fn section(label: &str) -> Self {
        let mut row = Row::new(label);
        row.section = true;
        row
    }

    fn amounts(label: &str, data: &OverviewData, value: impl Fn(&OverviewData, &str) -> f64) -> Self {
        let mut row = Row::new(label);
        for month in &data.months {
            row.cells.push(format_amount(value(data, month.as_str())));
        }
        row
    }
}

fn layout(rows: &[Row], columns: usize) -> String {
    let label_width = rows.iter().map(|row| row.label.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (idx, cell) in row.cells.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.len());
        }
    }

    let mut out = String::new();
    for row in rows {
        out.push_str(&format!("{:<label_width$}", row.label));
        if row.section {
            out.push('\n');
            continue;
        }
        for (idx, cell) in row.cells.iter().enumerate() {
            out.push_str(&format!("  {:>width$}", cell, width = widths[idx]));
        }
        out.push('\n');
    }
    out
}

/// Formats an amount with thousands grouping; fractional cents are kept only
/// when present.
pub fn format_amount(value: f64) -> String {
    if (value - value.trunc()).abs() < 0.005 {
        group_thousands(&format!("{}", value.trunc() as i64))
    } else {
        let text = format!("{:.2}", value);
        let (whole, frac) = text.split_once('.').unwrap();
        format!("{}.{}", group_thousands(whole), frac)
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - idx;
        if idx > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}
