//! Tally CLI - demo binary and terminal session management.
//!
//! Bridges [`tally_tui`] (the counting label widget) and the terminal,
//! providing RAII-based terminal management with guaranteed cleanup. The
//! event loop runs at a fixed render cadence: drain input, handle keys,
//! draw. The label animates itself through the tokio scheduler; the loop
//! only reads its text.

mod demo;

use std::fs::{self, OpenOptions};
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tally_config::TallyConfig;
use tally_core::SystemClock;
use tally_tui::{CountingLabel, TokioScheduler, palette};

use self::demo::{DemoState, KeyOutcome};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    if let Some((log_path, file)) = open_log_file() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %log_path.display(), "Logging initialized");
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> Option<(PathBuf, std::fs::File)> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
    Some((path, file))
}

fn log_file_path() -> Option<PathBuf> {
    let config_dir = TallyConfig::path()?.parent()?.to_path_buf();
    Some(config_dir.join("logs").join("tally.log"))
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// On drop, raw mode is disabled and the alternate screen is left, so the
/// terminal remains usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = TallyConfig::load().ok().flatten().unwrap_or_default();
    let high_contrast = config.app.as_ref().is_some_and(|app| app.high_contrast);
    let palette = palette(high_contrast);

    let mut state = DemoState::from_config(config);
    let mut scheduler = TokioScheduler;
    let mut label = CountingLabel::new(&palette, Arc::new(SystemClock))
        .with_tick_interval(state.tick_interval);
    label.start_animation(&mut scheduler, &state.request());

    let mut session = TerminalSession::new()?;
    run(
        &mut session.terminal,
        &mut label,
        &mut scheduler,
        &mut state,
        &palette,
    )
    .await
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    label: &mut CountingLabel,
    scheduler: &mut TokioScheduler,
    state: &mut DemoState,
    palette: &tally_tui::Palette,
) -> Result<()> {
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        frames.tick().await;

        // Non-blocking input: drain whatever is queued, then render.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && demo::handle_key(key, label, scheduler, state) == KeyOutcome::Quit
            {
                return Ok(());
            }
        }

        terminal.draw(|frame| demo::draw(frame, label, state, palette))?;
    }
}
