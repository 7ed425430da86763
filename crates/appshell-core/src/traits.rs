//! Token refresh trait.

use async_trait::async_trait;
use thiserror::Error;

/// Token fetch error.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Malformed token response: {0}")]
    MalformedResponse(String),
}

/// Trait for token-refresh backends.
///
/// The heartbeat scheduler only knows this seam; the production
/// implementation talks HTTP, tests substitute an in-memory source.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Fetch a fresh anti-forgery token.
    async fn fetch_token(&self) -> Result<String, TokenError>;
}
