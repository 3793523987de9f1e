// Common types and utilities for API handlers

use axum::{http::StatusCode, response::Json};
use chrono::Utc;
use serde::Serialize;

use crate::store::Timer;
use crate::web::TimerSummary;

// Helper type for API responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<()>>)>;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

// Summary conversion helper
pub fn convert_timer_to_summary(timer: &Timer) -> TimerSummary {
    let status = if timer.active {
        "Active".to_string()
    } else {
        "Suspended".to_string()
    };

    TimerSummary {
        name: timer.name.clone(),
        status,
        description: timer.description.clone(),
        schedule: timer.schedule.clone(),
        webhook_configured: timer.webhook_url.is_some(),
        last_fired_at: timer.last_fired_at.map(|t| t.to_rfc3339()),
        fire_count: timer.fire_count,
    }
}
