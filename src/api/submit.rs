use tracing::{info, warn};

use super::BudgetApi;
use crate::domain::BudgetRecord;
use crate::session::Session;

/// Result of one record in an expansion batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The backend accepted the record.
    Created,
    /// The backend or transport rejected the record.
    Failed(String),
    /// Not attempted because an earlier record failed.
    Skipped,
}

/// Per-record outcomes for one expansion batch, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionReport {
    pub outcomes: Vec<(BudgetRecord, SubmissionOutcome)>,
}

impl SubmissionReport {
    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == SubmissionOutcome::Created)
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.created() == self.outcomes.len()
    }

    pub fn first_failure(&self) -> Option<(&BudgetRecord, &str)> {
        self.outcomes.iter().find_map(|(record, outcome)| match outcome {
            SubmissionOutcome::Failed(message) => Some((record, message.as_str())),
            _ => None,
        })
    }
}

/// Submits expanded records one at a time, in month order.
///
/// Month N failing aborts months N+1.. so the persisted prefix is
/// deterministic; already-created records stay persisted (the backend has no
/// batch transaction). The caller gets the full per-record picture and owns
/// the partial-failure policy.
pub async fn submit_expansion(
    api: &dyn BudgetApi,
    session: &Session,
    records: &[BudgetRecord],
) -> SubmissionReport {
    let mut outcomes = Vec::with_capacity(records.len());
    let mut aborted = false;
    for record in records {
        if aborted {
            outcomes.push((record.clone(), SubmissionOutcome::Skipped));
            continue;
        }
        match api.create_budget(session, record).await {
            Ok(()) => {
                info!(budget = %record.name, "budget created");
                outcomes.push((record.clone(), SubmissionOutcome::Created));
            }
            Err(err) => {
                warn!(budget = %record.name, error = %err, "budget submission failed; skipping the rest");
                outcomes.push((record.clone(), SubmissionOutcome::Failed(err.to_string())));
                aborted = true;
            }
        }
    }
    SubmissionReport { outcomes }
}
