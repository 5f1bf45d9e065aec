//! Batch submission behavior against an in-memory backend double.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use spendview::api::{submit_expansion, BudgetApi, SubmissionOutcome};
use spendview::domain::{
    Budget, BudgetRecord, BudgetRequest, Category, Frequency, NewRecurringTransaction,
    NewTransaction, OverviewData, RecurringTransaction, Subcategory,
};
use spendview::errors::ClientError;
use spendview::expansion::expand_budget;
use spendview::session::Session;

#[derive(Default)]
struct FakeApi {
    created: Mutex<Vec<String>>,
    reject_containing: Option<String>,
}

impl FakeApi {
    fn rejecting(fragment: &str) -> Self {
        Self {
            reject_containing: Some(fragment.to_string()),
            ..Self::default()
        }
    }

    fn created_names(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl BudgetApi for FakeApi {
    async fn login(&self, username: &str, _password: &str) -> Result<Session, ClientError> {
        Ok(Session::new("fake-token", username))
    }

    async fn list_categories(&self, _session: &Session) -> Result<Vec<Category>, ClientError> {
        Ok(Vec::new())
    }

    async fn list_subcategories(
        &self,
        _session: &Session,
        _category_id: i64,
    ) -> Result<Vec<Subcategory>, ClientError> {
        Ok(Vec::new())
    }

    async fn list_budgets(&self, _session: &Session) -> Result<Vec<Budget>, ClientError> {
        Ok(Vec::new())
    }

    async fn create_budget(
        &self,
        _session: &Session,
        record: &BudgetRecord,
    ) -> Result<(), ClientError> {
        if let Some(fragment) = &self.reject_containing {
            if record.name.contains(fragment.as_str()) {
                return Err(ClientError::Remote {
                    status: 400,
                    message: format!("rejected {}", record.name),
                });
            }
        }
        self.created.lock().unwrap().push(record.name.clone());
        Ok(())
    }

    async fn delete_budget(&self, _session: &Session, name: &str) -> Result<(), ClientError> {
        self.created.lock().unwrap().retain(|n| n != name);
        Ok(())
    }

    async fn fetch_overview(&self, _session: &Session) -> Result<OverviewData, ClientError> {
        Ok(serde_json::from_str(
            r#"{
                "months": ["2024-01"],
                "monthly_data": {
                    "2024-01": {"budget": 300, "Food": 120, "Recurring": {"Gym": 30}}
                }
            }"#,
        )?)
    }

    async fn create_transaction(
        &self,
        _session: &Session,
        _transaction: &NewTransaction,
    ) -> Result<(), ClientError> {
        Ok(())
    }

    async fn list_recurring_transactions(
        &self,
        _session: &Session,
    ) -> Result<Vec<RecurringTransaction>, ClientError> {
        Ok(Vec::new())
    }

    async fn create_recurring_transaction(
        &self,
        _session: &Session,
        _template: &NewRecurringTransaction,
    ) -> Result<(), ClientError> {
        Ok(())
    }

    async fn delete_recurring_transaction(
        &self,
        _session: &Session,
        _id: i64,
    ) -> Result<(), ClientError> {
        Ok(())
    }
}

fn records() -> Vec<BudgetRecord> {
    let request = BudgetRequest {
        name: "Rent".into(),
        amount: 1200.0,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 10),
        end_date: NaiveDate::from_ymd_opt(2024, 4, 2),
        currency: "USD".into(),
        frequency: Some(Frequency::Monthly),
        is_active: true,
    };
    expand_budget(&request).unwrap()
}

#[tokio::test]
async fn full_batch_is_created_in_month_order() {
    let api = FakeApi::default();
    let session = api.login("alice", "pw").await.unwrap();

    let report = submit_expansion(&api, &session, &records()).await;

    assert!(report.is_complete());
    assert_eq!(report.created(), 4);
    assert_eq!(
        api.created_names(),
        vec![
            "Rent - January 2024",
            "Rent - February 2024",
            "Rent - March 2024",
            "Rent - April 2024"
        ]
    );
}

#[tokio::test]
async fn failure_aborts_later_months_but_keeps_earlier_ones() {
    let api = FakeApi::rejecting("March");
    let session = api.login("alice", "pw").await.unwrap();

    let report = submit_expansion(&api, &session, &records()).await;

    assert!(!report.is_complete());
    assert_eq!(report.created(), 2);
    // the already-submitted prefix stays persisted
    assert_eq!(
        api.created_names(),
        vec!["Rent - January 2024", "Rent - February 2024"]
    );

    let outcomes: Vec<&SubmissionOutcome> =
        report.outcomes.iter().map(|(_, outcome)| outcome).collect();
    assert_eq!(outcomes[0], &SubmissionOutcome::Created);
    assert_eq!(outcomes[1], &SubmissionOutcome::Created);
    assert!(matches!(outcomes[2], SubmissionOutcome::Failed(_)));
    assert_eq!(outcomes[3], &SubmissionOutcome::Skipped);

    let (record, message) = report.first_failure().unwrap();
    assert_eq!(record.name, "Rent - March 2024");
    assert!(message.contains("rejected"));
}

#[tokio::test]
async fn overview_state_refreshes_from_the_backend() {
    let api = FakeApi::default();
    let session = api.login("alice", "pw").await.unwrap();

    let mut state = spendview::overview::OverviewState::default();
    assert!(state.data().months.is_empty());

    state.refresh(&api, &session).await.unwrap();
    assert_eq!(state.data().months, vec!["2024-01"]);
    assert_eq!(state.summary().remaining["2024-01"], 150);
    assert_eq!(state.summary().categories, vec!["Food"]);
}

#[tokio::test]
async fn empty_batch_reports_nothing() {
    let api = FakeApi::default();
    let session = api.login("alice", "pw").await.unwrap();
    let report = submit_expansion(&api, &session, &[]).await;
    assert!(report.is_complete());
    assert_eq!(report.outcomes.len(), 0);
}
