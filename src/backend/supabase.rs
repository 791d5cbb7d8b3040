//! REST client for the hosted signups table
//!
//! Talks to a Supabase (PostgREST) endpoint: `POST {url}/rest/v1/{table}`
//! with the anon key in both the `apikey` and bearer headers.

use super::error::StoreError;
use super::traits::SignupStore;
use crate::state::FormRecord;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;

/// Error body returned by PostgREST
#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
}

/// Client for inserting signups into the hosted store
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    http: Client,
    insert_url: String,
}

impl SupabaseStore {
    /// Create a client for `table` on the project at `base_url`
    pub fn new(base_url: &str, anon_key: &str, table: &str) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("prefer", HeaderValue::from_static("return=minimal"));
        headers.insert(
            "apikey",
            HeaderValue::from_str(anon_key)
                .map_err(|e| StoreError::Transport(format!("invalid anon key: {e}")))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {anon_key}"))
                .map_err(|e| StoreError::Transport(format!("invalid anon key: {e}")))?,
        );

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            insert_url: insert_url(base_url, table),
        })
    }
}

#[async_trait]
impl SignupStore for SupabaseStore {
    async fn insert_signup(&self, record: &FormRecord) -> Result<(), StoreError> {
        tracing::debug!(url = %self.insert_url, "inserting signup");

        let response = self
            .http
            .post(&self.insert_url)
            .json(&[record])
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Err(classify_failure(status.as_u16(), &body))
    }
}

fn insert_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

/// Turn a non-2xx response into a `StoreError`
fn classify_failure(status: u16, body: &str) -> StoreError {
    let parsed: PostgrestError = serde_json::from_str(body).unwrap_or_default();
    let message = match (parsed.message, parsed.details) {
        (Some(m), Some(d)) => format!("{m} ({d})"),
        (Some(m), None) => m,
        (None, _) if body.is_empty() => format!("HTTP {status}"),
        (None, _) => body.to_string(),
    };
    StoreError::from_code(status, parsed.code, message)
}
