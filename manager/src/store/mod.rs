//! In-memory timer registry.
//!
//! This is the backing store the batch operations mutate. It holds every
//! configured timer keyed by name and serializes mutations behind a single
//! RwLock; per-id mutations for distinct names do not conflict beyond the
//! short critical section.
//!
//! The module is organized into submodules:
//! - `records` - Record types (entities)

mod records;

pub use records::*;

use crate::config::{Config, TimerConfig};
use crate::errors::StoreError;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

pub struct TimerStore {
    timers: Arc<RwLock<HashMap<String, Timer>>>, // timer_name -> timer
}

impl TimerStore {
    pub fn new() -> Self {
        Self {
            timers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Build a store seeded with the timers defined in configuration
    pub fn from_config(config: &Config) -> Self {
        let mut timers = HashMap::new();
        for (name, timer_config) in &config.timers {
            timers.insert(name.clone(), timer_from_config(name, timer_config));
        }

        Self {
            timers: Arc::new(RwLock::new(timers)),
        }
    }

    pub async fn insert(&self, timer: Timer) {
        let mut timers = self.timers.write().await;
        timers.insert(timer.name.clone(), timer);
    }

    pub async fn find(&self, name: &str) -> Option<Timer> {
        let timers = self.timers.read().await;
        timers.get(name).cloned()
    }

    /// Toggle the active flag of a timer
    ///
    /// Idempotent: setting the flag to its current value succeeds and still
    /// bumps `updated_at`.
    pub async fn set_active(&self, name: &str, active: bool) -> Result<(), StoreError> {
        let mut timers = self.timers.write().await;
        let timer = timers.get_mut(name).ok_or_else(|| StoreError::TimerNotFound {
            timer_name: name.to_string(),
        })?;

        timer.active = active;
        timer.updated_at = Utc::now();
        debug!(
            "Timer {} marked {}",
            name,
            if active { "active" } else { "suspended" }
        );
        Ok(())
    }

    /// Record a completed firing
    pub async fn record_fired(&self, name: &str) -> Result<(), StoreError> {
        let mut timers = self.timers.write().await;
        let timer = timers.get_mut(name).ok_or_else(|| StoreError::TimerNotFound {
            timer_name: name.to_string(),
        })?;

        let now = Utc::now();
        timer.last_fired_at = Some(now);
        timer.fire_count += 1;
        timer.updated_at = now;
        Ok(())
    }

    /// All timers, sorted by name for stable listings
    pub async fn list(&self) -> Vec<Timer> {
        let timers = self.timers.read().await;
        let mut all: Vec<Timer> = timers.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    pub async fn len(&self) -> usize {
        let timers = self.timers.read().await;
        timers.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn timer_from_config(name: &str, timer_config: &TimerConfig) -> Timer {
    let mut timer = Timer::new(name);
    timer.description = timer_config.description.clone();
    timer.schedule = timer_config.schedule.clone();
    timer.webhook_url = timer_config.webhook_url.clone();
    timer.payload = timer_config.payload.clone();
    timer.active = timer_config.enabled;
    timer
}

impl Default for TimerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TimerStore {
    fn clone(&self) -> Self {
        Self {
            timers: self.timers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = TimerStore::new();

        store.insert(Timer::new("billing-sync")).await;

        let timer = store.find("billing-sync").await.expect("timer should exist");
        assert_eq!(timer.name, "billing-sync");
        assert!(timer.active);
        assert_eq!(timer.fire_count, 0);

        assert!(store.find("unknown").await.is_none());
    }

    #[tokio::test]
    async fn test_set_active_toggles_flag() {
        let store = TimerStore::new();
        store.insert(Timer::new("billing-sync")).await;

        store.set_active("billing-sync", false).await.unwrap();
        assert!(!store.find("billing-sync").await.unwrap().active);

        store.set_active("billing-sync", true).await.unwrap();
        assert!(store.find("billing-sync").await.unwrap().active);

        // Idempotent: re-applying the same state still succeeds
        store.set_active("billing-sync", true).await.unwrap();
        assert!(store.find("billing-sync").await.unwrap().active);
    }

    #[tokio::test]
    async fn test_set_active_unknown_timer_fails() {
        let store = TimerStore::new();
        assert!(store.set_active("missing", false).await.is_err());
    }

    #[tokio::test]
    async fn test_record_fired_updates_stats() {
        let store = TimerStore::new();
        store.insert(Timer::new("billing-sync")).await;

        store.record_fired("billing-sync").await.unwrap();
        store.record_fired("billing-sync").await.unwrap();

        let timer = store.find("billing-sync").await.unwrap();
        assert_eq!(timer.fire_count, 2);
        assert!(timer.last_fired_at.is_some());
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_name() {
        let store = TimerStore::new();
        store.insert(Timer::new("zeta")).await;
        store.insert(Timer::new("alpha")).await;
        store.insert(Timer::new("mid")).await;

        let names: Vec<String> = store.list().await.into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}
