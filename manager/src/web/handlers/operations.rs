// Batch timer operation endpoints

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::common::ApiResponse;
use crate::services::{ActionStatus, OperationResult, TimerAction};
use crate::web::AppState;

/// Request body for batch operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdsRequest {
    pub ids: Vec<String>,
}

// Batch endpoints answer with the bare OperationResult; only a rejected
// request gets the error envelope
pub type BatchResult =
    Result<(StatusCode, Json<OperationResult>), (StatusCode, Json<ApiResponse<()>>)>;

/// Suspend a batch of timers
pub async fn suspend_timers(
    State(state): State<AppState>,
    Json(request): Json<IdsRequest>,
) -> BatchResult {
    execute_batch(&state, TimerAction::Suspend, &request).await
}

/// Resume a batch of timers
pub async fn resume_timers(
    State(state): State<AppState>,
    Json(request): Json<IdsRequest>,
) -> BatchResult {
    execute_batch(&state, TimerAction::Resume, &request).await
}

/// Trigger a batch of timers immediately
pub async fn trigger_timers(
    State(state): State<AppState>,
    Json(request): Json<IdsRequest>,
) -> BatchResult {
    execute_batch(&state, TimerAction::Trigger, &request).await
}

async fn execute_batch(
    state: &AppState,
    action: TimerAction,
    request: &IdsRequest,
) -> BatchResult {
    info!("Batch {} requested for {} ids", action, request.ids.len());

    match state.timer_service.execute(action, &request.ids).await {
        Ok(result) => Ok((status_code_for(result.status), Json(result))),
        Err(e) => {
            warn!("Batch {} rejected: {}", action, e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(e.to_string())),
            ))
        }
    }
}

// HTTP status mapping for aggregate results
fn status_code_for(status: ActionStatus) -> StatusCode {
    match status {
        ActionStatus::Successful => StatusCode::OK,
        ActionStatus::Partial => StatusCode::PARTIAL_CONTENT,
        ActionStatus::Error => StatusCode::BAD_REQUEST,
    }
}
