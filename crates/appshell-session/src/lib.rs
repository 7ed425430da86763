//! Session keepalive and navigation tracking for the application shell.
//!
//! Provides:
//! - `HeartbeatScheduler` - Periodic anti-forgery token refresh
//! - `HttpTokenSource` - Production token source over HTTP
//! - Unload/navigation-away tracking and request-error escalation

pub mod escalation;
pub mod heartbeat;
pub mod http;
pub mod unload;

pub use escalation::{EscalationDecision, RequestOptions, classify_failure};
pub use heartbeat::{HeartbeatScheduler, heartbeat_interval_secs};
pub use http::HttpTokenSource;
pub use unload::track_navigation_away;
