//! Store record types (entities).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A managed timer.
///
/// Timers are seeded from configuration at startup and mutated in place by
/// batch operations and scheduled firings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timer {
    pub name: String,
    pub description: Option<String>,
    /// 6-field cron expression (sec min hour day month dow)
    pub schedule: Option<String>,
    pub webhook_url: Option<String>,
    /// Extra JSON delivered with every fire event
    pub payload: Option<serde_json::Value>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_fired_at: Option<DateTime<Utc>>,
    pub fire_count: u64,
}

impl Timer {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            description: None,
            schedule: None,
            webhook_url: None,
            payload: None,
            active: true,
            created_at: now,
            updated_at: now,
            last_fired_at: None,
            fire_count: 0,
        }
    }
}
