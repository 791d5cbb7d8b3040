//! Academic email verification through ApyHub

use super::error::PrecheckError;
use super::traits::AcademicEmailVerifier;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default verification endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.apyhub.com/validate/email/academic";

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    data: serde_json::Value,
}

impl VerifyResponse {
    /// Only a literal `true` counts as academic
    fn is_academic(&self) -> bool {
        self.data == serde_json::Value::Bool(true)
    }
}

#[derive(Debug, Clone)]
pub struct ApyHubVerifier {
    http: Client,
    endpoint: String,
    token: String,
}

impl ApyHubVerifier {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl AcademicEmailVerifier for ApyHubVerifier {
    async fn verify(&self, email: &str) -> Result<bool, PrecheckError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("apy-token", &self.token)
            .json(&VerifyRequest { email })
            .send()
            .await
            .map_err(|e| PrecheckError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PrecheckError::Status(status.as_u16()));
        }

        let body: VerifyResponse = response
            .json()
            .await
            .map_err(|e| PrecheckError::Decode(e.to_string()))?;
        Ok(body.is_academic())
    }
}
