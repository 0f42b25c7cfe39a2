//! Textual rendering rules for interpolated counter values.

use serde::Deserialize;

/// How the current counter value is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayFormat {
    /// Truncate toward zero, base-10.
    #[default]
    Integer,
    /// Exactly one fractional digit.
    OneDecimal,
    /// Exactly two fractional digits.
    TwoDecimal,
    /// Truncate toward zero, uppercase hex, zero-padded to at least two digits.
    Hex,
}

impl DisplayFormat {
    /// Render a value under this format. Accepts any float; non-finite
    /// values degrade to the saturating integer cast for the integer
    /// formats and to `format!`'s own spelling for the decimal ones.
    #[must_use]
    pub fn render(self, value: f32) -> String {
        match self {
            DisplayFormat::Integer => format!("{}", value as i64),
            DisplayFormat::OneDecimal => format!("{value:.1}"),
            DisplayFormat::TwoDecimal => format!("{value:.2}"),
            DisplayFormat::Hex => {
                let truncated = value as i64;
                if truncated < 0 {
                    format!("-{:02X}", truncated.unsigned_abs())
                } else {
                    format!("{truncated:02X}")
                }
            }
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DisplayFormat::Integer => "integer",
            DisplayFormat::OneDecimal => "one-decimal",
            DisplayFormat::TwoDecimal => "two-decimal",
            DisplayFormat::Hex => "hex",
        }
    }

    /// The next format in display order, wrapping around.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            DisplayFormat::Integer => DisplayFormat::OneDecimal,
            DisplayFormat::OneDecimal => DisplayFormat::TwoDecimal,
            DisplayFormat::TwoDecimal => DisplayFormat::Hex,
            DisplayFormat::Hex => DisplayFormat::Integer,
        }
    }
}
