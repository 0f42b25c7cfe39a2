//! Ratatui rendering layer for Tally.
//!
//! [`CountingLabel`] is the widget: hand it a [`tally_core::Scheduler`] and a
//! [`CountRequest`] and it animates its own text until the count completes.

mod font;
mod label;
mod schedule;
mod theme;

pub use font::{ResolvedFont, resolve_font};
pub use label::{CountRequest, CountingLabel};
pub use schedule::TokioScheduler;
pub use theme::{Palette, ThemeProvider, palette};
