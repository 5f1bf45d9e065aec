//! Pure aggregation over the monthly overview matrix, plus the refreshable
//! snapshot the presentation shell renders from.

use std::collections::{BTreeSet, HashMap};

use crate::api::BudgetApi;
use crate::domain::{CellValue, OverviewData, BUDGET_LABEL, RECURRING_LABEL};
use crate::errors::ClientError;
use crate::session::Session;

/// Display-ready digest of one overview snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewSummary {
    /// Sorted union of variable-expense categories across all months.
    pub categories: Vec<String>,
    /// Sorted union of recurring subcategory labels across all months.
    pub recurring_labels: Vec<String>,
    /// Month label to rounded remaining balance.
    pub remaining: HashMap<String, i64>,
}

/// Derives the category rows and per-month remaining balances from a raw
/// overview snapshot. Pure: identical input always yields identical output.
pub fn compute_overview(data: &OverviewData) -> OverviewSummary {
    let mut categories = BTreeSet::new();
    let mut recurring_labels = BTreeSet::new();
    for cells in data.monthly_data.values() {
        for (label, value) in cells {
            match label.as_str() {
                BUDGET_LABEL => {}
                RECURRING_LABEL => {
                    if let Some(nested) = value.nested() {
                        recurring_labels.extend(nested.keys().cloned());
                    }
                }
                _ => {
                    categories.insert(label.clone());
                }
            }
        }
    }

    let remaining = data
        .months
        .iter()
        .map(|month| (month.clone(), remaining_balance(data, month)))
        .collect();

    OverviewSummary {
        categories: categories.into_iter().collect(),
        recurring_labels: recurring_labels.into_iter().collect(),
        remaining,
    }
}

/// Remaining balance for one month: budget minus variable expenses minus
/// recurring expenses, rounded to the nearest unit. Missing months, missing
/// categories, and unparseable cells all count as zero.
pub fn remaining_balance(data: &OverviewData, month: &str) -> i64 {
    let Some(cells) = data.monthly_data.get(month) else {
        return 0;
    };
    let budget = cells.get(BUDGET_LABEL).map_or(0.0, CellValue::amount);
    let mut spent = 0.0;
    for (label, value) in cells {
        match label.as_str() {
            BUDGET_LABEL => {}
            RECURRING_LABEL => {
                if let Some(nested) = value.nested() {
                    spent += nested.values().map(CellValue::amount).sum::<f64>();
                }
            }
            _ => spent += value.amount(),
        }
    }
    (budget - spent).round() as i64
}

/// Budget amount for a month, zero when absent.
pub fn budget_amount(data: &OverviewData, month: &str) -> f64 {
    data.monthly_data
        .get(month)
        .and_then(|cells| cells.get(BUDGET_LABEL))
        .map_or(0.0, CellValue::amount)
}

/// Cell amount for a (month, category) pair, zero when absent.
pub fn cell_amount(data: &OverviewData, month: &str, category: &str) -> f64 {
    data.monthly_data
        .get(month)
        .and_then(|cells| cells.get(category))
        .map_or(0.0, CellValue::amount)
}

/// Amount for one recurring subcategory in a month, zero when absent.
pub fn recurring_amount(data: &OverviewData, month: &str, subcategory: &str) -> f64 {
    data.monthly_data
        .get(month)
        .and_then(|cells| cells.get(RECURRING_LABEL))
        .and_then(CellValue::nested)
        .and_then(|nested| nested.get(subcategory))
        .map_or(0.0, CellValue::amount)
}

/// Latest overview snapshot plus its digest.
///
/// The shell decides when to refresh (startup, regained focus, after a
/// mutation); the aggregation itself never touches the network.
#[derive(Debug, Clone, Default)]
pub struct OverviewState {
    data: OverviewData,
    summary: OverviewSummary,
}

impl OverviewState {
    pub fn data(&self) -> &OverviewData {
        &self.data
    }

    pub fn summary(&self) -> &OverviewSummary {
        &self.summary
    }

    /// Re-fetches the snapshot and recomputes the digest. On failure the
    /// previous snapshot is kept.
    pub async fn refresh(
        &mut self,
        api: &dyn BudgetApi,
        session: &Session,
    ) -> Result<(), ClientError> {
        let data = api.fetch_overview(session).await?;
        self.summary = compute_overview(&data);
        self.data = data;
        Ok(())
    }
}
