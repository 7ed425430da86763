//! Live relative timestamps.
//!
//! On-screen "modified three minutes ago" labels go stale while the
//! page sits open. The host re-renders them on a fixed cadence using
//! the humanized age computed here.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::{task::JoinHandle, time};

/// Cadence at which relative labels should be re-rendered.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;

/// Humanize the age of `then` relative to `now`.
///
/// Follows the usual fuzzy-time bands: anything under 45 units rounds
/// to the unit below, 45 and up rounds to "a <unit> ago". Timestamps
/// in the future are treated as "just now".
#[must_use]
pub fn relative_modified_date(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);

    let rounded = |unit: i64| (secs + unit / 2) / unit;
    match secs {
        s if s < 45 => "seconds ago".to_string(),
        s if s < 90 => "a minute ago".to_string(),
        s if s < 45 * MINUTE => format!("{} minutes ago", rounded(MINUTE)),
        s if s < 90 * MINUTE => "an hour ago".to_string(),
        s if s < 22 * HOUR => format!("{} hours ago", rounded(HOUR)),
        s if s < 36 * HOUR => "a day ago".to_string(),
        s if s < 26 * DAY => format!("{} days ago", rounded(DAY)),
        s if s < 46 * DAY => "a month ago".to_string(),
        s if s < 320 * DAY => format!("{} months ago", rounded(MONTH)),
        s if s < 548 * DAY => "a year ago".to_string(),
        _ => format!("{} years ago", secs / (365 * DAY)),
    }
}

/// Spawn a task invoking `refresh` every [`REFRESH_INTERVAL`].
///
/// The host's callback walks its live labels and re-renders them. Runs
/// until the handle is dropped or aborted.
pub fn spawn_refresher<F>(mut refresh: F) -> JoinHandle<()>
where
    F: FnMut() + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = time::interval(REFRESH_INTERVAL);
        // skip the immediate first tick, labels were just rendered
        ticker.tick().await;
        loop {
            ticker.tick().await;
            refresh();
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use chrono::TimeDelta;

    use super::*;

    fn age(secs: i64) -> String {
        let now = Utc::now();
        relative_modified_date(now - TimeDelta::seconds(secs), now)
    }

    #[test]
    fn bands_round_like_fuzzy_time() {
        assert_eq!(age(0), "seconds ago");
        assert_eq!(age(44), "seconds ago");
        assert_eq!(age(60), "a minute ago");
        assert_eq!(age(180), "3 minutes ago");
        assert_eq!(age(HOUR), "an hour ago");
        assert_eq!(age(5 * HOUR), "5 hours ago");
        assert_eq!(age(DAY), "a day ago");
        assert_eq!(age(10 * DAY), "10 days ago");
        assert_eq!(age(MONTH), "a month ago");
        assert_eq!(age(3 * MONTH), "3 months ago");
        assert_eq!(age(400 * DAY), "a year ago");
        assert_eq!(age(3 * 365 * DAY), "3 years ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = Utc::now();
        assert_eq!(
            relative_modified_date(now + TimeDelta::seconds(300), now),
            "seconds ago"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn refresher_fires_on_the_cadence() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let handle = spawn_refresher(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        time::sleep(REFRESH_INTERVAL / 2).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);

        time::sleep(REFRESH_INTERVAL * 2).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);

        handle.abort();
    }
}
