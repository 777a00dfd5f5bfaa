//! src/store/rest.rs
use crate::configuration::StoreSettings;
use crate::domain::EmailSubmission;
use crate::store::{EmailStore, StoreError};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

/// Inserts rows through a PostgREST style endpoint (`{api_url}/rest/v1/{table}`).
#[derive(Debug)]
pub struct RestEmailStore {
    http_client: Client,
    api_url: String,
    api_key: Secret<String>,
}

impl RestEmailStore {
    pub fn new(api_url: String, api_key: Secret<String>, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the HTTP client");

        Self {
            http_client,
            api_url,
            api_key,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.api_url.trim_end_matches('/'), table)
    }
}

impl From<&StoreSettings> for RestEmailStore {
    fn from(settings: &StoreSettings) -> Self {
        Self::new(
            settings.api_url.clone(),
            settings.api_key.clone(),
            settings.timeout(),
        )
    }
}

impl EmailStore for RestEmailStore {
    #[tracing::instrument(
        name = "Inserting an email into the remote table",
        skip(self, submission)
    )]
    async fn insert(&self, table: &str, submission: &EmailSubmission) -> Result<(), StoreError> {
        let response = self
            .http_client
            .post(self.table_url(table))
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
            .header("accept", "application/json")
            .header("Prefer", "return=minimal")
            .json(submission)
            .send()
            .await
            .map_err(StoreError::Transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
