// Read-only timer query endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::common::{convert_timer_to_summary, ApiResponse, ApiResult};
use crate::store::Timer;
use crate::web::{AppState, TimerSummary};

/// List all timers
pub async fn list_timers(State(state): State<AppState>) -> ApiResult<Vec<TimerSummary>> {
    let timers = state.store.list().await;
    let summaries: Vec<TimerSummary> = timers.iter().map(convert_timer_to_summary).collect();
    Ok(Json(ApiResponse::success(summaries)))
}

/// Get a single timer by name
pub async fn get_timer(
    Path(timer_name): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Timer> {
    match state.store.find(&timer_name).await {
        Some(timer) => Ok(Json(ApiResponse::success(timer))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!(
                "Timer '{}' not found",
                timer_name
            ))),
        )),
    }
}
