//! Tokio-backed repeating schedules.

use std::time::Duration;

use tally_core::{ScheduleHandle, Scheduler, TickCallback};

/// Production scheduler: each schedule is a spawned task driven by
/// `tokio::time::interval`.
///
/// The cancellation flag is checked immediately before every callback
/// invocation, so a handle cancelled between fires stops the schedule
/// without another tick reaching the label. Must be used from within a
/// tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&mut self, interval: Duration, mut tick: TickCallback) -> ScheduleHandle {
        let handle = ScheduleHandle::new();
        let flag = handle.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first interval tick completes immediately; consume it so
            // the first fire lands one full interval after scheduling.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if flag.is_cancelled() {
                    break;
                }
                if tick().is_break() {
                    break;
                }
            }
            tracing::debug!(interval_ms = interval.as_millis() as u64, "schedule retired");
        });
        handle
    }
}
