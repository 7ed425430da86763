//! Server-supplied session configuration.

use serde::{Deserialize, Serialize};

/// Session settings handed to the shell at startup.
///
/// Mirrors the capabilities payload the server embeds in the initial
/// page: an optional session lifetime and a keepalive switch that is
/// on unless explicitly disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Server-side session lifetime in seconds, if the server exposes it.
    #[serde(default)]
    pub session_lifetime_secs: Option<f64>,

    /// Whether the session heartbeat should run at all.
    #[serde(default = "default_keepalive")]
    pub session_keepalive: bool,
}

const fn default_keepalive() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_lifetime_secs: None,
            session_keepalive: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keepalive_defaults_to_enabled() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert!(config.session_keepalive);
        assert!(config.session_lifetime_secs.is_none());
    }

    #[test]
    fn explicit_fields_are_honored() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"session_lifetime_secs": 7200, "session_keepalive": false}"#)
                .unwrap();
        assert_eq!(config.session_lifetime_secs, Some(7200.0));
        assert!(!config.session_keepalive);
    }
}
