//! Custom error types for the timer manager
//!
//! Provides structured error handling with context for different failure scenarios.

use std::fmt;

/// Request validation error variants
///
/// Raised before any per-id processing happens. A validation failure rejects
/// the whole batch; it is never mixed into a partial result.
#[derive(Debug)]
pub enum ValidationError {
    /// The id list was empty
    EmptyIdList,

    /// An id was empty or consisted only of whitespace
    BlankId { position: usize },
}

/// Store error variants
#[derive(Debug)]
pub enum StoreError {
    /// Timer not found in the registry
    TimerNotFound { timer_name: String },
}

/// Fire delivery error variants
#[derive(Debug)]
pub enum FireError {
    /// Webhook request could not be delivered
    DeliveryFailed { timer_name: String, reason: String },

    /// Webhook endpoint answered with a non-success status
    WebhookRejected { timer_name: String, status: u16 },
}

/// Per-id operation error variants
///
/// Folded into `Failed` outcomes by the batch executor, never surfaced to the
/// HTTP caller as an error.
#[derive(Debug)]
pub enum OperationError {
    /// Store lookup or mutation failed
    Store(StoreError),

    /// Firing the timer's webhook failed
    Fire(FireError),
}

// Implement Display for all error types
impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyIdList => {
                write!(f, "Id list must contain at least one id")
            }
            ValidationError::BlankId { position } => {
                write!(f, "Id at position {} is empty or blank", position)
            }
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::TimerNotFound { timer_name } => {
                write!(f, "Timer '{}' not found", timer_name)
            }
        }
    }
}

impl fmt::Display for FireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireError::DeliveryFailed { timer_name, reason } => {
                write!(f, "Webhook delivery for '{}' failed: {}", timer_name, reason)
            }
            FireError::WebhookRejected { timer_name, status } => {
                write!(
                    f,
                    "Webhook for '{}' rejected with status {}",
                    timer_name, status
                )
            }
        }
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationError::Store(e) => write!(f, "{}", e),
            OperationError::Fire(e) => write!(f, "{}", e),
        }
    }
}

// Implement std::error::Error
impl std::error::Error for ValidationError {}
impl std::error::Error for StoreError {}
impl std::error::Error for FireError {}
impl std::error::Error for OperationError {}

// Conversion helpers for sub-errors
impl From<StoreError> for OperationError {
    fn from(err: StoreError) -> Self {
        OperationError::Store(err)
    }
}

impl From<FireError> for OperationError {
    fn from(err: FireError) -> Self {
        OperationError::Fire(err)
    }
}
