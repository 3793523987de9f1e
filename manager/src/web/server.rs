// File: manager/src/web/server.rs
use crate::config::Config;
use crate::services::TimerService;
use crate::store::TimerStore;
use crate::web::{handlers, AppState};
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub async fn start_web_server(
    config: Arc<Config>,
    store: Arc<TimerStore>,
    timer_service: Arc<TimerService>,
) -> Result<()> {
    let state = AppState::new(config.clone(), store, timer_service);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // === BATCH OPERATION ROUTES ===
        .route("/api/timers/suspend", post(handlers::suspend_timers))
        .route("/api/timers/resume", post(handlers::resume_timers))
        .route("/api/timers/trigger", post(handlers::trigger_timers))
        // === TIMER QUERY ROUTES ===
        .route("/api/timers", get(handlers::list_timers))
        .route("/api/timers/{timer_name}", get(handlers::get_timer))
        // Add middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
