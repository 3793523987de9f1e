//! HTTP request handlers for the Manager API.
//!
//! This module is organized by domain:
//! - `common` - Shared types and conversion helpers
//! - `operations` - Batch suspend/resume/trigger endpoints
//! - `timers` - Read-only timer query endpoints

pub mod common;
pub mod operations;
pub mod timers;

// Re-export all public handler functions for convenience
// Note: common module is internal, used only by sibling modules
pub use operations::*;
pub use timers::*;
