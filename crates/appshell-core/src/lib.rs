//! Core abstractions for application shell session state.
//!
//! This crate provides the fundamental building blocks:
//! - `SessionConfig` - Server-supplied session settings
//! - `SessionContext` - Shared request token and navigation flags
//! - `TokenSource` trait - Pluggable token-refresh backend

pub mod config;
pub mod context;
pub mod traits;

pub use config::SessionConfig;
pub use context::SessionContext;
pub use traits::{TokenError, TokenSource};
