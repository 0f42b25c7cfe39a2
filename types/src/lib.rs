//! Shared types for Tally counting labels.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by the animation core (interpolation), the config crate
//! (deserialization) and the tui crate (rendering).

mod easing;
mod format;
mod label;

pub use easing::Easing;
pub use format::DisplayFormat;
pub use label::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, FontSpec, FontSpecError, LabelAlignment};
