use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::BudgetApi;
use crate::domain::{
    Budget, BudgetRecord, Category, NewRecurringTransaction, NewTransaction, OverviewData,
    RecurringTransaction, Subcategory,
};
use crate::errors::ClientError;
use crate::session::Session;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// reqwest-backed implementation of [`BudgetApi`].
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Builds a client for the given base URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        debug!(path, "GET");
        let response = self
            .client
            .get(self.url(path))
            .header(header::AUTHORIZATION, session.bearer())
            .query(query)
            .send()
            .await?;
        decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        debug!(path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .header(header::AUTHORIZATION, session.bearer())
            .json(body)
            .send()
            .await?;
        accept(response).await
    }

    async fn delete(&self, session: &Session, path: &str) -> Result<(), ClientError> {
        debug!(path, "DELETE");
        let response = self
            .client
            .delete(self.url(path))
            .header(header::AUTHORIZATION, session.bearer())
            .send()
            .await?;
        accept(response).await
    }
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[async_trait]
impl BudgetApi for HttpApi {
    async fn login(&self, username: &str, password: &str) -> Result<Session, ClientError> {
        let response = self
            .client
            .post(self.url("accounts/login/"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        let body: LoginResponse = decode(response).await?;
        debug!(username, "login succeeded");
        Ok(Session::new(body.access_token, username))
    }

    async fn list_categories(&self, session: &Session) -> Result<Vec<Category>, ClientError> {
        self.get_json(session, "categories/", &[]).await
    }

    async fn list_subcategories(
        &self,
        session: &Session,
        category_id: i64,
    ) -> Result<Vec<Subcategory>, ClientError> {
        self.get_json(
            session,
            "subcategories/",
            &[("category_id", category_id.to_string())],
        )
        .await
    }

    async fn list_budgets(&self, session: &Session) -> Result<Vec<Budget>, ClientError> {
        self.get_json(session, "budgets/", &[]).await
    }

    async fn create_budget(
        &self,
        session: &Session,
        record: &BudgetRecord,
    ) -> Result<(), ClientError> {
        self.post_json(session, "budgets/", record).await
    }

    async fn delete_budget(&self, session: &Session, name: &str) -> Result<(), ClientError> {
        let path = format!("budgets/{}/", urlencoding::encode(name));
        self.delete(session, &path).await
    }

    async fn fetch_overview(&self, session: &Session) -> Result<OverviewData, ClientError> {
        self.get_json(session, "reports/overview-data/", &[]).await
    }

    async fn create_transaction(
        &self,
        session: &Session,
        transaction: &NewTransaction,
    ) -> Result<(), ClientError> {
        self.post_json(session, "transactions/", transaction).await
    }

    async fn list_recurring_transactions(
        &self,
        session: &Session,
    ) -> Result<Vec<RecurringTransaction>, ClientError> {
        self.get_json(session, "transactions/recurring-transactions/", &[])
            .await
    }

    async fn create_recurring_transaction(
        &self,
        session: &Session,
        template: &NewRecurringTransaction,
    ) -> Result<(), ClientError> {
        self.post_json(session, "transactions/recurring-transactions/", template)
            .await
    }

    async fn delete_recurring_transaction(
        &self,
        session: &Session,
        id: i64,
    ) -> Result<(), ClientError> {
        let path = format!("transactions/recurring-transactions/{}/", id);
        self.delete(session, &path).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        Err(remote_error(status, response).await)
    }
}

async fn accept(response: Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(remote_error(status, response).await)
    }
}

/// Backend errors arrive as `{"detail": ...}` or `{"error": ...}`; fall back
/// to the status line when the body is not in that shape.
async fn remote_error(status: StatusCode, response: Response) -> ClientError {
    let message = match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("detail")
            .or_else(|| body.get("error"))
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string()),
        Err(_) => status.to_string(),
    };
    ClientError::Remote {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let api = HttpApi::new("http://localhost:8000/").unwrap();
        assert_eq!(api.url("budgets/"), "http://localhost:8000/budgets/");
    }
}
