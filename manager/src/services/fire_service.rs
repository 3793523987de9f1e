// File: manager/src/services/fire_service.rs
use crate::constants::http;
use crate::errors::FireError;
use crate::store::Timer;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

/// How a firing was initiated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FireReason {
    /// Fired by the cron scheduler
    Scheduled,
    /// Fired by a trigger request
    Manual,
}

/// JSON body delivered to a timer's webhook on every fire event
#[derive(Debug, Clone, Serialize)]
pub struct FirePayload {
    pub event_id: String,
    pub timer_name: String,
    pub reason: FireReason,
    pub fired_at: DateTime<Utc>,
    pub description: Option<String>,
    pub payload: Option<serde_json::Value>,
}

/// Delivers fire events to timer webhooks
pub struct FireService {
    client: Client,
}

impl FireService {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(http::WEBHOOK_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client for FireService");

        Self { client }
    }

    /// Fire a timer once
    ///
    /// A timer without a configured webhook fires trivially: the event is
    /// logged and no HTTP request is made. A transport error or a non-2xx
    /// response from the webhook is a fire failure.
    pub async fn fire(&self, timer: &Timer, reason: FireReason) -> Result<(), FireError> {
        let Some(webhook_url) = &timer.webhook_url else {
            debug!("Timer {} has no webhook configured, nothing to deliver", timer.name);
            return Ok(());
        };

        let event = FirePayload {
            event_id: Uuid::new_v4().to_string(),
            timer_name: timer.name.clone(),
            reason,
            fired_at: Utc::now(),
            description: timer.description.clone(),
            payload: timer.payload.clone(),
        };

        let response = self
            .client
            .post(webhook_url)
            .json(&event)
            .send()
            .await
            .map_err(|e| FireError::DeliveryFailed {
                timer_name: timer.name.clone(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(FireError::WebhookRejected {
                timer_name: timer.name.clone(),
                status: response.status().as_u16(),
            });
        }

        info!(
            "Fired timer {} (event {}, reason {:?})",
            timer.name, event.event_id, reason
        );
        Ok(())
    }
}

impl Default for FireService {
    fn default() -> Self {
        Self::new()
    }
}
