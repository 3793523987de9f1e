// File: manager/src/web/mod.rs
pub mod handlers;
pub mod server;

pub use server::{create_router, start_web_server};

use serde::Serialize;
use std::sync::Arc;

use crate::config::Config;
use crate::services::TimerService;
use crate::store::TimerStore;

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<TimerStore>,
    pub timer_service: Arc<TimerService>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        store: Arc<TimerStore>,
        timer_service: Arc<TimerService>,
    ) -> Self {
        Self {
            config,
            store,
            timer_service,
        }
    }
}

// API response types for listings
#[derive(Debug, Clone, Serialize)]
pub struct TimerSummary {
    pub name: String,
    pub status: String, // "Active", "Suspended"
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub webhook_configured: bool,
    pub last_fired_at: Option<String>,
    pub fire_count: u64,
}
