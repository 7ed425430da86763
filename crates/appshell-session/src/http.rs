//! HTTP token source.

use appshell_core::{TokenError, TokenSource};
use async_trait::async_trait;
use serde::Deserialize;

/// Body of the token-refresh endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// `TokenSource` backed by the shell's token-refresh endpoint.
#[derive(Debug, Clone)]
pub struct HttpTokenSource {
    client: reqwest::Client,
    url: String,
}

impl HttpTokenSource {
    /// Create a source fetching from `url`.
    #[must_use]
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl TokenSource for HttpTokenSource {
    async fn fetch_token(&self) -> Result<String, TokenError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| TokenError::Transport(e.to_string()))?;

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| TokenError::MalformedResponse(e.to_string()))?;

        Ok(body.token)
    }
}
