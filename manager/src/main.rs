// File: manager/src/main.rs
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod constants;
mod errors;
mod scheduler;
mod services;
mod store;
mod web;

use config::ConfigManager;
use scheduler::TimerScheduler;
use services::{FireService, TimerService};
use store::TimerStore;

use web::start_web_server;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with reduced verbosity
    let env_filter = EnvFilter::from_default_env()
        .add_directive("timer_manager=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("tokio_cron_scheduler=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting Timer Manager");

    // Load configuration
    let config_manager = ConfigManager::new("config".to_string()).await?;
    let config = config_manager.get_current_config();
    info!("Configuration loaded: {} timers", config.timers.len());

    // Initialize timer store from configuration
    let store = Arc::new(TimerStore::from_config(&config));
    info!("Timer store initialized with {} timers", store.len().await);

    // Initialize fire delivery
    let fire_service = Arc::new(FireService::new());

    // Initialize batch operation service
    let timer_service = Arc::new(TimerService::new(store.clone(), fire_service.clone()));
    info!("Timer service initialized");

    // Initialize and start scheduler
    let scheduler = TimerScheduler::new(store.clone(), fire_service.clone()).await?;
    scheduler.start().await?;

    // Start web server
    start_web_server(config, store, timer_service).await?;

    Ok(())
}
