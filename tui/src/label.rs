//! The counting label widget.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Color;
use ratatui::widgets::{Paragraph, Widget};

use tally_core::{Clock, CounterAnimation, ScheduleHandle, Scheduler, TICK_INTERVAL, TickOutcome};
use tally_types::{DisplayFormat, Easing, FontSpec, LabelAlignment};

use crate::font::{ResolvedFont, resolve_font};
use crate::theme::ThemeProvider;

/// Parameters for one counting run.
#[derive(Debug, Clone)]
pub struct CountRequest {
    pub start_value: f32,
    pub end_value: f32,
    pub duration: Duration,
    pub easing: Easing,
    pub format: DisplayFormat,
    pub alignment: LabelAlignment,
    pub font: FontSpec,
}

/// State shared with the tick callback.
struct LabelShared {
    text: String,
    animation: Option<CounterAnimation>,
    /// Bumped on every `start_animation`; a tick scheduled under an older
    /// epoch is stale and retires itself without touching the label.
    epoch: u64,
}

/// A text label that animates a numeric value from a start to an end value,
/// re-rendering the interpolated value on every tick.
///
/// The label never talks to a timer directly: `start_animation` asks the
/// host-provided [`Scheduler`] for a repeating tick and keeps the
/// cancellation handle. Starting a new count cancels the previous schedule
/// before the new one is established, so at most one schedule is ever live.
pub struct CountingLabel {
    shared: Arc<Mutex<LabelShared>>,
    schedule: Option<ScheduleHandle>,
    clock: Arc<dyn Clock>,
    tick_interval: Duration,
    text_color: Color,
    font: ResolvedFont,
    alignment: Alignment,
}

impl CountingLabel {
    /// A blank label. The theme's main text color is captured once here.
    #[must_use]
    pub fn new(theme: &dyn ThemeProvider, clock: Arc<dyn Clock>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(LabelShared {
                text: String::new(),
                animation: None,
                epoch: 0,
            })),
            schedule: None,
            clock,
            tick_interval: TICK_INTERVAL,
            text_color: theme.main_text_color(),
            font: ResolvedFont::default(),
            alignment: Alignment::Center,
        }
    }

    /// Override the 10ms tick period (host configuration).
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Start counting. Cancels any in-flight count, applies alignment and
    /// font immediately, and schedules the repeating tick. A zero duration
    /// skips ticking entirely and renders the end value at once.
    ///
    /// Accepts any finite bounds; this operation does not fail.
    pub fn start_animation(&mut self, scheduler: &mut dyn Scheduler, request: &CountRequest) {
        self.alignment = alignment_for(request.alignment);
        self.font = resolve_font(&request.font);

        if let Some(handle) = self.schedule.take() {
            handle.cancel();
            tracing::debug!("superseded in-flight count");
        }

        let mut shared = self.shared.lock().expect("label state lock");
        shared.epoch += 1;
        let epoch = shared.epoch;

        if request.duration.is_zero() {
            shared.animation = None;
            shared.text = request.format.render(request.end_value);
            return;
        }

        let animation = CounterAnimation::new(
            request.start_value,
            request.end_value,
            request.duration,
            request.easing,
            request.format,
            self.clock.now(),
        );
        shared.text = animation.display_text();
        shared.animation = Some(animation);
        drop(shared);

        let shared = Arc::clone(&self.shared);
        let clock = Arc::clone(&self.clock);
        self.schedule = Some(scheduler.schedule_repeating(
            self.tick_interval,
            Box::new(move || {
                let mut state = shared.lock().expect("label state lock");
                if state.epoch != epoch {
                    return ControlFlow::Break(());
                }
                let Some(animation) = state.animation.as_mut() else {
                    return ControlFlow::Break(());
                };
                let outcome = animation.advance(clock.now());
                state.text = animation.display_text();
                match outcome {
                    TickOutcome::Finished => {
                        state.animation = None;
                        ControlFlow::Break(())
                    }
                    TickOutcome::Running => ControlFlow::Continue(()),
                }
            }),
        ));
    }

    /// The currently rendered text, readable by the host for layout.
    #[must_use]
    pub fn text(&self) -> String {
        self.shared.lock().expect("label state lock").text.clone()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.shared
            .lock()
            .expect("label state lock")
            .animation
            .is_some()
    }

    /// Advisory font size from the last request, for host layout.
    #[must_use]
    pub fn font_size(&self) -> u16 {
        self.font.size
    }
}

impl Drop for CountingLabel {
    fn drop(&mut self) {
        if let Some(handle) = self.schedule.take() {
            handle.cancel();
        }
    }
}

impl Widget for &CountingLabel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text())
            .alignment(self.alignment)
            .style(self.font.style().fg(self.text_color))
            .render(area, buf);
    }
}

fn alignment_for(alignment: LabelAlignment) -> Alignment {
    match alignment {
        LabelAlignment::Left => Alignment::Left,
        LabelAlignment::Center => Alignment::Center,
        LabelAlignment::Right => Alignment::Right,
    }
}
