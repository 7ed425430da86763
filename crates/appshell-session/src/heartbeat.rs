//! Session heartbeat.
//!
//! Calls the token-refresh backend periodically so that neither the
//! server-side session nor the anti-forgery token expires while the
//! shell is open.

use std::{sync::Arc, time::Duration};

use appshell_core::{SessionConfig, SessionContext, TokenSource};
use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

/// Base interval when the server does not expose a session lifetime.
const DEFAULT_BASE_SECS: f64 = 900.0;
/// Minimum one minute between heartbeats.
const MIN_INTERVAL_SECS: i64 = 60;
/// Maximum 24 hours between heartbeats.
const MAX_INTERVAL_SECS: i64 = 24 * 3600;

/// Compute the heartbeat interval from the configured session lifetime.
///
/// Half the lifetime, clamped to `[60, 86400]` seconds; an absent or
/// non-finite lifetime falls back to a 900 second base.
#[must_use]
pub fn heartbeat_interval_secs(session_lifetime_secs: Option<f64>) -> u64 {
    let base = match session_lifetime_secs {
        Some(lifetime) if lifetime.is_finite() => (lifetime / 2.0).floor(),
        _ => DEFAULT_BASE_SECS,
    };
    // float-to-int casts saturate, so degenerate lifetimes end up at a bound
    (base as i64).clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS) as u64
}

/// Periodic token refresh task.
///
/// Ticks forever once spawned. Each tick issues an independent fetch:
/// a failed fetch is logged and the stale token kept until the next
/// cycle; a slow fetch never delays the next tick, and overlapping
/// responses resolve as last-arriving-wins on the shared context.
pub struct HeartbeatScheduler {
    ctx: Arc<SessionContext>,
    source: Arc<dyn TokenSource>,
    interval: Duration,
}

impl HeartbeatScheduler {
    /// Build a scheduler from the session configuration.
    ///
    /// Returns `None` when keepalive is disabled.
    #[must_use]
    pub fn from_config(
        config: &SessionConfig,
        ctx: Arc<SessionContext>,
        source: Arc<dyn TokenSource>,
    ) -> Option<Self> {
        if !config.session_keepalive {
            return None;
        }
        let interval = Duration::from_secs(heartbeat_interval_secs(config.session_lifetime_secs));
        Some(Self {
            ctx,
            source,
            interval,
        })
    }

    /// The computed tick interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn the heartbeat loop.
    ///
    /// There is no stop condition; the host may abort the returned
    /// handle if it ever tears the shell down.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // an interval's first tick completes immediately; the first
            // refresh should wait a full period
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let ctx = Arc::clone(&self.ctx);
                let source = Arc::clone(&self.source);
                tokio::spawn(async move {
                    match source.fetch_token().await {
                        Ok(token) => ctx.set_request_token(token),
                        Err(e) => tracing::error!("session heartbeat failed: {e}"),
                    }
                });
            }
        })
    }
}
