//! Unit tests for configuration loading and store seeding

use tempfile::TempDir;
use timer_manager::config::ConfigManager;
use timer_manager::store::TimerStore;

async fn load_config(dir: &TempDir) -> timer_manager::config::Config {
    let manager = ConfigManager::new(dir.path().to_string_lossy().to_string())
        .await
        .expect("Failed to load configuration");
    (*manager.get_current_config()).clone()
}

#[tokio::test]
async fn test_loads_main_and_group_configs() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("main.toml"),
        "host = \"127.0.0.1\"\nport = 9000\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("billing.toml"),
        r#"
[timers.invoice-sync]
description = "Invoice sync"
schedule = "0 0 2 * * *"
webhook_url = "https://hooks.example.com/invoice"

[timers.billing-retry]
enabled = false
"#,
    )
    .unwrap();

    let config = load_config(&dir).await;

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9000);
    assert_eq!(config.timers.len(), 2);

    // Group-file timer names are prefixed with the group name
    let invoice = config
        .timers
        .get("billing-invoice-sync")
        .expect("prefixed timer name");
    assert!(invoice.enabled);
    assert_eq!(invoice.schedule.as_deref(), Some("0 0 2 * * *"));

    // Already-prefixed names are not double-prefixed
    let retry = config.timers.get("billing-retry").expect("as-is name");
    assert!(!retry.enabled);
}

#[tokio::test]
async fn test_main_config_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("main.toml"), "").unwrap();

    let config = load_config(&dir).await;

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8095);
    assert!(config.timers.is_empty());
}

#[tokio::test]
async fn test_missing_main_config_fails() {
    let dir = TempDir::new().unwrap();

    let result = ConfigManager::new(dir.path().to_string_lossy().to_string()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_store_seeded_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("main.toml"), "").unwrap();
    std::fs::write(
        dir.path().join("jobs.toml"),
        r#"
[timers.nightly]
schedule = "0 0 1 * * *"

[timers.paused]
enabled = false
"#,
    )
    .unwrap();

    let config = load_config(&dir).await;
    let store = TimerStore::from_config(&config);

    assert_eq!(store.len().await, 2);

    let nightly = store.find("jobs-nightly").await.unwrap();
    assert!(nightly.active);
    assert_eq!(nightly.schedule.as_deref(), Some("0 0 1 * * *"));
    assert_eq!(nightly.fire_count, 0);

    let paused = store.find("jobs-paused").await.unwrap();
    assert!(!paused.active);
}
