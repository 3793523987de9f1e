// File: manager/src/services/timer_service.rs
//
// Batch operation executor: applies one action to every id in a request and
// aggregates the per-id outcomes into a single result
//
use crate::errors::{OperationError, StoreError, ValidationError};
use crate::services::fire_service::{FireReason, FireService};
use crate::store::TimerStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The action applied uniformly to each id in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    Suspend,
    Resume,
    Trigger,
}

impl TimerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerAction::Suspend => "suspend",
            TimerAction::Resume => "resume",
            TimerAction::Trigger => "trigger",
        }
    }

    /// Past-tense verb used in result messages
    fn verb(&self) -> &'static str {
        match self {
            TimerAction::Suspend => "suspended",
            TimerAction::Resume => "resumed",
            TimerAction::Trigger => "triggered",
        }
    }
}

impl fmt::Display for TimerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate classification of a batch result
///
/// Serialized as `SUCCESSFUL` / `PARTIAL` / `ERROR`. The legacy spelling `OK`
/// is accepted on input as a synonym for `SUCCESSFUL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStatus {
    #[serde(rename = "SUCCESSFUL", alias = "OK")]
    Successful,
    #[serde(rename = "PARTIAL")]
    Partial,
    #[serde(rename = "ERROR")]
    Error,
}

/// Per-id outcome of one applied action
///
/// Failures are data, not control flow: a failed id never aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Processed(String),
    Failed(String),
}

/// Aggregate of all per-id outcomes for one request
///
/// `processed_ids` and `failed_ids` partition the (deduplicated) input batch
/// in processing order. Immutable once returned, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    pub status: ActionStatus,
    pub message: String,
    pub processed_ids: Vec<String>,
    pub failed_ids: Vec<String>,
}

impl OperationResult {
    /// Fold a sequence of outcomes into the aggregate result
    pub fn from_outcomes(action: TimerAction, outcomes: Vec<Outcome>) -> Self {
        let mut processed_ids = Vec::new();
        let mut failed_ids = Vec::new();

        for outcome in outcomes {
            match outcome {
                Outcome::Processed(id) => processed_ids.push(id),
                Outcome::Failed(id) => failed_ids.push(id),
            }
        }

        let status = if failed_ids.is_empty() {
            ActionStatus::Successful
        } else if processed_ids.is_empty() {
            ActionStatus::Error
        } else {
            ActionStatus::Partial
        };

        let message = match status {
            ActionStatus::Successful => {
                format!("{} timers {}", processed_ids.len(), action.verb())
            }
            ActionStatus::Partial => {
                format!(
                    "{} {}, {} failed",
                    processed_ids.len(),
                    action.verb(),
                    failed_ids.len()
                )
            }
            ActionStatus::Error => "All operations failed".to_string(),
        };

        Self {
            status,
            message,
            processed_ids,
            failed_ids,
        }
    }
}

pub struct TimerService {
    store: Arc<TimerStore>,
    fire_service: Arc<FireService>,
}

impl TimerService {
    pub fn new(store: Arc<TimerStore>, fire_service: Arc<FireService>) -> Self {
        Self {
            store,
            fire_service,
        }
    }

    /// Mark every timer in the batch inactive
    pub async fn suspend(&self, ids: &[String]) -> Result<OperationResult, ValidationError> {
        self.execute(TimerAction::Suspend, ids).await
    }

    /// Mark every timer in the batch active
    pub async fn resume(&self, ids: &[String]) -> Result<OperationResult, ValidationError> {
        self.execute(TimerAction::Resume, ids).await
    }

    /// Fire every timer in the batch immediately, regardless of active state
    pub async fn trigger(&self, ids: &[String]) -> Result<OperationResult, ValidationError> {
        self.execute(TimerAction::Trigger, ids).await
    }

    /// Apply `action` to each id independently and aggregate the outcomes
    ///
    /// The id list is validated before any per-id work: an empty list or a
    /// blank id rejects the whole call with no processing. Duplicate ids are
    /// collapsed to their first occurrence. Per-id failures never abort the
    /// remainder of the batch.
    pub async fn execute(
        &self,
        action: TimerAction,
        ids: &[String],
    ) -> Result<OperationResult, ValidationError> {
        validate_ids(ids)?;
        let ids = dedupe_preserving_order(ids);

        let mut outcomes = Vec::with_capacity(ids.len());
        for id in ids {
            match self.apply(action, &id).await {
                Ok(()) => {
                    debug!("{} succeeded for timer {}", action, id);
                    outcomes.push(Outcome::Processed(id));
                }
                Err(e) => {
                    warn!("{} failed for timer {}: {}", action, id, e);
                    outcomes.push(Outcome::Failed(id));
                }
            }
        }

        let result = OperationResult::from_outcomes(action, outcomes);
        info!("Batch {} finished: {}", action, result.message);
        Ok(result)
    }

    async fn apply(&self, action: TimerAction, name: &str) -> Result<(), OperationError> {
        match action {
            TimerAction::Suspend => {
                self.store.set_active(name, false).await?;
                Ok(())
            }
            TimerAction::Resume => {
                self.store.set_active(name, true).await?;
                Ok(())
            }
            TimerAction::Trigger => {
                let timer =
                    self.store
                        .find(name)
                        .await
                        .ok_or_else(|| StoreError::TimerNotFound {
                            timer_name: name.to_string(),
                        })?;

                self.fire_service.fire(&timer, FireReason::Manual).await?;
                self.store.record_fired(name).await?;
                Ok(())
            }
        }
    }
}

fn validate_ids(ids: &[String]) -> Result<(), ValidationError> {
    if ids.is_empty() {
        return Err(ValidationError::EmptyIdList);
    }

    for (position, id) in ids.iter().enumerate() {
        if id.trim().is_empty() {
            return Err(ValidationError::BlankId { position });
        }
    }

    Ok(())
}

fn dedupe_preserving_order(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
