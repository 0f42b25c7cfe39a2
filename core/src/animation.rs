//! The counter animation state machine.

use std::time::{Duration, Instant};

use tally_types::{DisplayFormat, Easing};

/// Fixed period of the repeating animation tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Result of advancing the animation by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Finished,
}

/// One in-flight count from `start_value` to `end_value`.
///
/// Time accumulates as deltas between tick timestamps rather than as a tick
/// count, so a late tick does not slow the count down. Once `elapsed`
/// reaches `duration` the animation pins to the exact end value: the final
/// frame bypasses easing entirely and is immune to floating-point drift.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    start_value: f32,
    end_value: f32,
    duration: Duration,
    elapsed: Duration,
    last_update: Instant,
    easing: Easing,
    format: DisplayFormat,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(
        start_value: f32,
        end_value: f32,
        duration: Duration,
        easing: Easing,
        format: DisplayFormat,
        now: Instant,
    ) -> Self {
        tracing::debug!(
            start_value,
            end_value,
            duration_ms = duration.as_millis() as u64,
            easing = easing.as_str(),
            format = format.as_str(),
            "counter animation started"
        );
        Self {
            start_value,
            end_value,
            duration,
            elapsed: Duration::ZERO,
            last_update: now,
            easing,
            format,
        }
    }

    /// Accumulate the delta since the previous tick and clamp at the end.
    pub fn advance(&mut self, now: Instant) -> TickOutcome {
        let delta = now.saturating_duration_since(self.last_update);
        self.last_update = now;
        self.elapsed = self.elapsed.saturating_add(delta);

        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            tracing::debug!(end_value = self.end_value, "counter animation finished");
            TickOutcome::Finished
        } else {
            TickOutcome::Running
        }
    }

    /// The interpolated value at the current elapsed time.
    #[must_use]
    pub fn current_value(&self) -> f32 {
        if self.elapsed >= self.duration {
            return self.end_value;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.start_value + self.easing.apply(t) * (self.end_value - self.start_value)
    }

    /// The current value rendered under the animation's display format.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.format.render(self.current_value())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Linear time fraction in `[0, 1]`, before easing.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}
