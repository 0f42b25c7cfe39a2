//! Repeating tick schedules with synchronous cancellation.
//!
//! A [`Scheduler`] owns the "every N milliseconds" concern; the animation
//! itself never talks to a timer. The contract every implementation upholds:
//! the cancellation flag is checked immediately before each fire, so once
//! [`ScheduleHandle::cancel`] returns no further tick runs, and a callback
//! that returns [`ControlFlow::Break`] retires its own schedule.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::clock::ManualClock;

/// A repeating tick callback. Returns `Break` to retire the schedule.
pub type TickCallback = Box<dyn FnMut() -> ControlFlow<()> + Send>;

/// Something that can run a callback repeatedly at a fixed interval.
pub trait Scheduler {
    fn schedule_repeating(&mut self, interval: Duration, tick: TickCallback) -> ScheduleHandle;
}

/// Cancellation handle for one repeating schedule.
///
/// Cancelling is synchronous and idempotent. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct ScheduleHandle {
    cancelled: Arc<AtomicBool>,
}

impl ScheduleHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

struct ManualTask {
    interval: Duration,
    until_due: Duration,
    tick: TickCallback,
    handle: ScheduleHandle,
}

/// Deterministic scheduler driving virtual time, for tests.
///
/// Owns a handle to a [`ManualClock`] and keeps it in lockstep with the
/// schedules: [`ManualScheduler::advance`] moves the clock in interval-sized
/// steps and fires whatever falls due, so callbacks that read the clock see
/// exactly the timestamps a live timer would have delivered.
pub struct ManualScheduler {
    clock: ManualClock,
    tasks: Vec<ManualTask>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            tasks: Vec::new(),
        }
    }

    /// Number of schedules that are still live (not cancelled, not retired).
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| !task.handle.is_cancelled())
            .count()
    }

    /// Advance virtual time, firing due callbacks along the way.
    pub fn advance(&mut self, delta: Duration) {
        let mut remaining = delta;
        loop {
            self.tasks.retain(|task| !task.handle.is_cancelled());

            let Some(next_due) = self.tasks.iter().map(|task| task.until_due).min() else {
                self.clock.advance(remaining);
                return;
            };

            let step = next_due.min(remaining);
            self.clock.advance(step);
            remaining -= step;

            for task in &mut self.tasks {
                if task.handle.is_cancelled() {
                    continue;
                }
                task.until_due = task.until_due.saturating_sub(step);
                if task.until_due.is_zero() {
                    if (task.tick)().is_break() {
                        task.handle.cancel();
                    } else {
                        task.until_due = task.interval;
                    }
                }
            }

            if remaining.is_zero() {
                self.tasks.retain(|task| !task.handle.is_cancelled());
                return;
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, interval: Duration, tick: TickCallback) -> ScheduleHandle {
        debug_assert!(
            !interval.is_zero(),
            "repeating schedule requires a nonzero interval"
        );
        let handle = ScheduleHandle::new();
        self.tasks.push(ManualTask {
            interval,
            until_due: interval,
            tick,
            handle: handle.clone(),
        });
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use std::sync::Mutex;

    fn counting_task(scheduler: &mut ManualScheduler, interval_ms: u64) -> (ScheduleHandle, Arc<Mutex<u32>>) {
        let fired = Arc::new(Mutex::new(0u32));
        let seen = Arc::clone(&fired);
        let handle = scheduler.schedule_repeating(
            Duration::from_millis(interval_ms),
            Box::new(move || {
                *seen.lock().expect("fire count lock") += 1;
                ControlFlow::Continue(())
            }),
        );
        (handle, fired)
    }

    fn fire_count(fired: &Arc<Mutex<u32>>) -> u32 {
        *fired.lock().expect("fire count lock")
    }

    #[test]
    fn fires_once_per_interval() {
        let mut scheduler = ManualScheduler::new(ManualClock::new());
        let (_handle, fired) = counting_task(&mut scheduler, 10);
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(fire_count(&fired), 10);
    }

    #[test]
    fn does_not_fire_before_first_interval() {
        let mut scheduler = ManualScheduler::new(ManualClock::new());
        let (_handle, fired) = counting_task(&mut scheduler, 10);
        scheduler.advance(Duration::from_millis(9));
        assert_eq!(fire_count(&fired), 0);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(fire_count(&fired), 1);
    }

    #[test]
    fn no_fire_after_cancel() {
        let mut scheduler = ManualScheduler::new(ManualClock::new());
        let (handle, fired) = counting_task(&mut scheduler, 10);
        scheduler.advance(Duration::from_millis(30));
        handle.cancel();
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(fire_count(&fired), 3);
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut scheduler = ManualScheduler::new(ManualClock::new());
        let (handle, _fired) = counting_task(&mut scheduler, 10);
        handle.cancel();
        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn break_retires_the_schedule() {
        let mut scheduler = ManualScheduler::new(ManualClock::new());
        let fired = Arc::new(Mutex::new(0u32));
        let seen = Arc::clone(&fired);
        scheduler.schedule_repeating(
            Duration::from_millis(10),
            Box::new(move || {
                let mut count = seen.lock().expect("fire count lock");
                *count += 1;
                if *count == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }),
        );
        scheduler.advance(Duration::from_millis(200));
        assert_eq!(fire_count(&fired), 3);
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn clock_advances_with_the_schedule() {
        let clock = ManualClock::new();
        let start = clock.now();
        let mut scheduler = ManualScheduler::new(clock.clone());
        let (_handle, _fired) = counting_task(&mut scheduler, 10);
        scheduler.advance(Duration::from_millis(55));
        assert_eq!(clock.now() - start, Duration::from_millis(55));
    }

    #[test]
    fn clock_advances_even_with_no_tasks() {
        let clock = ManualClock::new();
        let start = clock.now();
        let mut scheduler = ManualScheduler::new(clock.clone());
        scheduler.advance(Duration::from_millis(70));
        assert_eq!(clock.now() - start, Duration::from_millis(70));
    }

    #[test]
    fn independent_schedules_do_not_interfere() {
        let mut scheduler = ManualScheduler::new(ManualClock::new());
        let (first, fired_a) = counting_task(&mut scheduler, 10);
        let (_second, fired_b) = counting_task(&mut scheduler, 20);
        scheduler.advance(Duration::from_millis(40));
        first.cancel();
        scheduler.advance(Duration::from_millis(40));
        assert_eq!(fire_count(&fired_a), 4);
        assert_eq!(fire_count(&fired_b), 4);
        assert_eq!(scheduler.active_count(), 1);
    }
}
