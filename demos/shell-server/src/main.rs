//! Demo host application wiring the shell pieces to an axum server.
//!
//! Run with: cargo run -p shell-server-demo
//!
//! The demo plays both roles: it serves the token-refresh endpoint and
//! runs the heartbeat scheduler polling it. `/menu` runs the fitter for
//! arbitrary viewport measurements, `/session` shows the live context.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use appshell_core::{SessionConfig, SessionContext};
use appshell_session::{HeartbeatScheduler, HttpTokenSource};
use appshell_ui::{MenuItem, MenuLayout, ViewportState, fit_menu_for_viewport};
use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

const MIN_APPS_DESKTOP: usize = 8;

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    ctx: Arc<SessionContext>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let ctx = Arc::new(SessionContext::new(Uuid::new_v4().to_string()));
    let state = AppState {
        ctx: Arc::clone(&ctx),
    };

    // Build router
    let app = Router::new()
        .route("/csrftoken", get(csrftoken_handler))
        .route("/menu", get(menu_handler))
        .route("/session", get(session_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind")?;
    tracing::info!("Shell demo listening on http://{addr}");

    let config = SessionConfig {
        session_lifetime_secs: Some(120.0),
        session_keepalive: true,
    };
    let source = Arc::new(HttpTokenSource::new(
        reqwest::Client::new(),
        format!("http://{addr}/csrftoken"),
    ));
    if let Some(scheduler) = HeartbeatScheduler::from_config(&config, ctx, source) {
        tracing::info!("Session heartbeat every {:?}", scheduler.interval());
        let _heartbeat = scheduler.spawn();
    }

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}

async fn csrftoken_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "token": Uuid::new_v4().to_string() }))
}

async fn session_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "request_token": state.ctx.request_token(),
        "unload_started": state.ctx.unload_started(),
        "navigating_away": state.ctx.navigating_away(),
    }))
}

#[derive(Deserialize)]
struct MenuQuery {
    total_header_width: f64,
    reserved_width: f64,
    window_width: f64,
    #[serde(default = "default_item_width")]
    item_width: f64,
}

const fn default_item_width() -> f64 {
    50.0
}

async fn menu_handler(Query(query): Query<MenuQuery>) -> Json<MenuLayout> {
    let items = vec![
        MenuItem::new("dashboard"),
        MenuItem::new("files"),
        MenuItem::new("photos"),
        MenuItem::active("mail"),
        MenuItem::new("calendar"),
        MenuItem::new("contacts"),
        MenuItem::new("notes"),
        MenuItem::new("tasks"),
        MenuItem::new("talk"),
        MenuItem::new("settings"),
    ];
    let viewport = ViewportState::new(
        query.total_header_width,
        query.reserved_width,
        query.window_width,
    );
    Json(fit_menu_for_viewport(
        &items,
        query.item_width,
        &viewport,
        MIN_APPS_DESKTOP,
    ))
}
