//! Cron-based scheduling for automated timer firing
//!
//! # Features
//!
//! - **Cron-based scheduling**: Uses 6-field cron expressions (sec min hour day month dow)
//! - **Timezone-aware**: All schedules run in the timezone where the manager is deployed
//! - **Suspension-aware**: A suspended timer is skipped at tick time, not unscheduled
//! - **Independent failures**: One timer failing to schedule or fire never affects the rest
//!
//! # Configuration
//!
//! Schedules are defined per-timer in `config/{group}.toml`:
//!
//! ```toml
//! [timers.invoice-sync]
//! schedule = "0 0 2 * * *"  # Daily at 2 AM
//! webhook_url = "https://hooks.example.com/invoice-sync"
//! ```

pub mod operations;
pub use operations::TimerScheduler;
