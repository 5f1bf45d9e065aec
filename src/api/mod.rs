//! Collaborator REST backend: the trait seam plus the reqwest implementation.

mod http;
mod submit;

pub use http::HttpApi;
pub use submit::{submit_expansion, SubmissionOutcome, SubmissionReport};

use async_trait::async_trait;

use crate::domain::{
    Budget, BudgetRecord, Category, NewRecurringTransaction, NewTransaction, OverviewData,
    RecurringTransaction, Subcategory,
};
use crate::errors::ClientError;
use crate::session::Session;

/// Logical operations the backend offers. Everything except `login` takes an
/// explicit [`Session`]; there is no ambient token state.
#[async_trait]
pub trait BudgetApi: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<Session, ClientError>;

    async fn list_categories(&self, session: &Session) -> Result<Vec<Category>, ClientError>;
    async fn list_subcategories(
        &self,
        session: &Session,
        category_id: i64,
    ) -> Result<Vec<Subcategory>, ClientError>;

    async fn list_budgets(&self, session: &Session) -> Result<Vec<Budget>, ClientError>;
    async fn create_budget(
        &self,
        session: &Session,
        record: &BudgetRecord,
    ) -> Result<(), ClientError>;
    /// Budgets are addressed by name; expanded months each carry a distinct
    /// derived name.
    async fn delete_budget(&self, session: &Session, name: &str) -> Result<(), ClientError>;

    async fn fetch_overview(&self, session: &Session) -> Result<OverviewData, ClientError>;

    async fn create_transaction(
        &self,
        session: &Session,
        transaction: &NewTransaction,
    ) -> Result<(), ClientError>;

    async fn list_recurring_transactions(
        &self,
        session: &Session,
    ) -> Result<Vec<RecurringTransaction>, ClientError>;
    async fn create_recurring_transaction(
        &self,
        session: &Session,
        template: &NewRecurringTransaction,
    ) -> Result<(), ClientError>;
    async fn delete_recurring_transaction(
        &self,
        session: &Session,
        id: i64,
    ) -> Result<(), ClientError>;
}
