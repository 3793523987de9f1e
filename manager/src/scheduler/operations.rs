// File: manager/src/scheduler/operations.rs
use crate::services::{FireReason, FireService};
use crate::store::TimerStore;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{debug, error, info, instrument};

pub struct TimerScheduler {
    store: Arc<TimerStore>,
    fire_service: Arc<FireService>,
    scheduler: JobScheduler,
}

impl TimerScheduler {
    pub async fn new(store: Arc<TimerStore>, fire_service: Arc<FireService>) -> Result<Self> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| anyhow!("Failed to create JobScheduler: {}", e))?;

        Ok(Self {
            store,
            fire_service,
            scheduler,
        })
    }

    #[instrument(skip(self))]
    pub async fn start(&self) -> Result<()> {
        info!("Starting timer scheduler with 6-field cron format (sec min hour day month dow)");
        let mut scheduled_count = 0;

        for timer in self.store.list().await {
            let Some(schedule) = timer.schedule.clone() else {
                debug!("No schedule configured for {}", timer.name);
                continue;
            };

            match self.schedule_fire_job(timer.name.clone(), schedule.clone()).await {
                Ok(_) => {
                    scheduled_count += 1;
                    info!("Scheduled firing for {}: {}", timer.name, schedule);
                }
                Err(e) => {
                    error!(
                        "Failed to schedule firing for {}: {} (schedule: {})",
                        timer.name, e, schedule
                    );
                }
            }
        }

        self.scheduler
            .start()
            .await
            .map_err(|e| anyhow!("Failed to start scheduler: {}", e))?;

        info!("Timer scheduler started with {} scheduled timers", scheduled_count);
        Ok(())
    }

    async fn schedule_fire_job(&self, timer_name: String, schedule: String) -> Result<()> {
        validate_6_field_cron(&schedule)
            .map_err(|e| anyhow!("Invalid 6-field cron schedule '{}': {}", schedule, e))?;

        let store = self.store.clone();
        let fire_service = self.fire_service.clone();
        let timer_name_clone = timer_name.clone();

        let job = Job::new_async(schedule.as_str(), move |_uuid, _scheduler| {
            let store = store.clone();
            let fire_service = fire_service.clone();
            let timer_name = timer_name_clone.clone();

            Box::pin(async move {
                // Re-read at tick time so suspend/resume takes effect immediately
                let Some(timer) = store.find(&timer_name).await else {
                    error!("Scheduled firing skipped: timer {} no longer exists", timer_name);
                    return;
                };

                if !timer.active {
                    debug!("Timer {} is suspended, skipping scheduled firing", timer_name);
                    return;
                }

                info!("Executing scheduled firing for {}", timer_name);

                match fire_service.fire(&timer, FireReason::Scheduled).await {
                    Ok(_) => {
                        if let Err(e) = store.record_fired(&timer_name).await {
                            error!("Failed to record firing for {}: {}", timer_name, e);
                        }
                        info!("Scheduled firing completed for {}", timer_name);
                    }
                    Err(e) => {
                        error!("Scheduled firing failed for {}: {}", timer_name, e);
                    }
                }
            })
        })
        .map_err(|e| anyhow!("Failed to create fire job for '{}': {}", schedule, e))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| anyhow!("Failed to add fire job to scheduler: {}", e))?;

        Ok(())
    }
}

fn validate_6_field_cron(schedule: &str) -> Result<()> {
    let fields: Vec<&str> = schedule.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(anyhow!(
            "expected 6 fields (sec min hour day month dow), got {}",
            fields.len()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_6_field_cron_accepted() {
        assert!(validate_6_field_cron("0 0 2 * * *").is_ok());
        assert!(validate_6_field_cron("*/30 * * * * *").is_ok());
    }

    #[test]
    fn test_5_field_cron_rejected() {
        assert!(validate_6_field_cron("0 2 * * *").is_err());
        assert!(validate_6_field_cron("").is_err());
    }
}
