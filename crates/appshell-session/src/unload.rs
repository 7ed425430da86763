//! Navigation-away tracking around page unload.
//!
//! A before-unload signal does not mean the page is actually going
//! away: a confirmation dialog (an upload in progress, say) may keep
//! the user on the page. Other components query the navigating-away
//! flag to tell an intentional reload apart from an abandoned request,
//! so the flag must clear itself again when the navigation was
//! cancelled.

use std::sync::Arc;

use appshell_core::SessionContext;
use tokio::{task::JoinHandle, time};

/// How long to wait for the unload to actually happen before deciding
/// the user cancelled the navigation.
const NAVIGATION_GRACE: time::Duration = time::Duration::from_secs(10);

/// React to a before-unload signal.
///
/// Sets the navigating-away flag immediately and spawns a task that
/// clears it after [`NAVIGATION_GRACE`] unless an unload signal was
/// observed in the meantime.
pub fn track_navigation_away(ctx: Arc<SessionContext>) -> JoinHandle<()> {
    ctx.set_navigating_away(true);
    tokio::spawn(async move {
        time::sleep(NAVIGATION_GRACE).await;
        if !ctx.unload_started() {
            ctx.set_navigating_away(false);
        }
    })
}
