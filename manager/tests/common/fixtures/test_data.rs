//! Common test data builders

use timer_manager::store::{Timer, TimerStore};

pub fn test_timer(name: &str) -> Timer {
    Timer::new(name)
}

pub fn test_timer_with_webhook(name: &str, webhook_url: &str) -> Timer {
    let mut timer = Timer::new(name);
    timer.webhook_url = Some(webhook_url.to_string());
    timer
}

/// A store pre-populated with active timers (no webhooks)
pub async fn seeded_store(names: &[&str]) -> TimerStore {
    let store = TimerStore::new();
    for name in names {
        store.insert(test_timer(name)).await;
    }
    store
}
