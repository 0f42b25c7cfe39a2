//! Demo application state, key handling and rendering.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use tally_config::TallyConfig;
use tally_core::Scheduler;
use tally_tui::{CountRequest, CountingLabel, Palette};
use tally_types::{DisplayFormat, Easing, FontSpec, LabelAlignment};

/// Parameters the keybindings mutate between counts.
pub struct DemoState {
    pub start_value: f32,
    pub end_value: f32,
    pub duration: Duration,
    pub tick_interval: Duration,
    pub easing: Easing,
    pub format: DisplayFormat,
    pub alignment: LabelAlignment,
    pub font: FontSpec,
}

impl DemoState {
    #[must_use]
    pub fn from_config(config: TallyConfig) -> Self {
        let animation = config.animation.unwrap_or_default();
        let label = config.label.unwrap_or_default();
        Self {
            start_value: 0.0,
            end_value: 255.0,
            duration: animation.duration(),
            tick_interval: animation.tick_interval(),
            easing: animation.easing,
            format: animation.format,
            alignment: label.alignment,
            font: label.font,
        }
    }

    #[must_use]
    pub fn request(&self) -> CountRequest {
        CountRequest {
            start_value: self.start_value,
            end_value: self.end_value,
            duration: self.duration,
            easing: self.easing,
            format: self.format,
            alignment: self.alignment,
            font: self.font.clone(),
        }
    }

    /// The same count with no animation: jump straight to the end value.
    #[must_use]
    pub fn instant_request(&self) -> CountRequest {
        CountRequest {
            duration: Duration::ZERO,
            ..self.request()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Quit,
}

pub fn handle_key(
    key: KeyEvent,
    label: &mut CountingLabel,
    scheduler: &mut dyn Scheduler,
    state: &mut DemoState,
) -> KeyOutcome {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Char('r') => label.start_animation(scheduler, &state.request()),
        KeyCode::Char('e') => {
            state.easing = state.easing.cycled();
            label.start_animation(scheduler, &state.request());
        }
        KeyCode::Char('f') => {
            state.format = state.format.cycled();
            label.start_animation(scheduler, &state.request());
        }
        KeyCode::Char('a') => {
            state.alignment = state.alignment.cycled();
            label.start_animation(scheduler, &state.request());
        }
        KeyCode::Char('z') => label.start_animation(scheduler, &state.instant_request()),
        _ => {}
    }
    KeyOutcome::Handled
}

pub fn draw(frame: &mut Frame, label: &CountingLabel, state: &DemoState, palette: &Palette) {
    let bg = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Counter
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    frame.render_widget(label, centered_line(chunks[0]));
    draw_status_bar(frame, chunks[1], label, state, palette);
}

/// The single row vertically centered in `area`.
fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}

fn draw_status_bar(
    frame: &mut Frame,
    area: Rect,
    label: &CountingLabel,
    state: &DemoState,
    palette: &Palette,
) {
    let muted = Style::default().fg(palette.text_muted);
    let accent = Style::default().fg(palette.accent);
    let activity = if label.is_animating() {
        Span::styled("counting", Style::default().fg(palette.warning))
    } else {
        Span::styled("done", muted)
    };

    let line = Line::from(vec![
        activity,
        Span::styled("  ", muted),
        Span::styled(state.easing.as_str(), accent),
        Span::styled(" · ", muted),
        Span::styled(state.format.as_str(), accent),
        Span::styled(" · ", muted),
        Span::styled(state.alignment.as_str(), accent),
        Span::styled(
            format!(" · {:.1}s", state.duration.as_secs_f32()),
            muted,
        ),
        Span::styled(
            "   r replay · e easing · f format · a align · z jump · q quit",
            muted,
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tally_core::{ManualClock, ManualScheduler};

    fn harness() -> (CountingLabel, ManualScheduler, DemoState) {
        let clock = ManualClock::new();
        let scheduler = ManualScheduler::new(clock.clone());
        let label = CountingLabel::new(&Palette::standard(), Arc::new(clock));
        let state = DemoState::from_config(TallyConfig::default());
        (label, scheduler, state)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys_quit() {
        let (mut label, mut scheduler, mut state) = harness();
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(
                handle_key(key, &mut label, &mut scheduler, &mut state),
                KeyOutcome::Quit
            );
        }
    }

    #[test]
    fn replay_starts_a_single_schedule() {
        let (mut label, mut scheduler, mut state) = harness();
        handle_key(press(KeyCode::Char('r')), &mut label, &mut scheduler, &mut state);
        handle_key(press(KeyCode::Char('r')), &mut label, &mut scheduler, &mut state);
        assert_eq!(scheduler.active_count(), 1);
        assert!(label.is_animating());
    }

    #[test]
    fn easing_key_cycles_and_restarts() {
        let (mut label, mut scheduler, mut state) = harness();
        let before = state.easing;
        handle_key(press(KeyCode::Char('e')), &mut label, &mut scheduler, &mut state);
        assert_eq!(state.easing, before.cycled());
        assert!(label.is_animating());
    }

    #[test]
    fn jump_key_skips_the_animation() {
        let (mut label, mut scheduler, mut state) = harness();
        handle_key(press(KeyCode::Char('z')), &mut label, &mut scheduler, &mut state);
        assert!(!label.is_animating());
        assert_eq!(label.text(), "255");
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn default_state_matches_config_defaults() {
        let state = DemoState::from_config(TallyConfig::default());
        assert_eq!(state.easing, Easing::EaseOut);
        assert_eq!(state.format, DisplayFormat::Integer);
        assert_eq!(state.tick_interval, Duration::from_millis(10));
    }
}
