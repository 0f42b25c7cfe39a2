//! Label styling types: alignment and font specs.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Horizontal alignment of the rendered counter text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl LabelAlignment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LabelAlignment::Left => "left",
            LabelAlignment::Center => "center",
            LabelAlignment::Right => "right",
        }
    }

    /// The next alignment in display order, wrapping around.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            LabelAlignment::Left => LabelAlignment::Center,
            LabelAlignment::Center => LabelAlignment::Right,
            LabelAlignment::Right => LabelAlignment::Left,
        }
    }
}

pub const DEFAULT_FONT_FAMILY: &str = "default";
pub const DEFAULT_FONT_SIZE: u16 = 14;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FontSpecError {
    #[error("font spec has an empty family name")]
    EmptyFamily,
    #[error("invalid font size {value:?}")]
    InvalidSize { value: String },
}

/// A requested font: family name plus point size.
///
/// Parsed from `"family"` or `"family:size"`. The family is resolved by the
/// rendering layer; resolution of an unknown family is a silent fallback,
/// not an error. The size is advisory on cell-grid backends.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct FontSpec {
    pub family: String,
    pub size: u16,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl FromStr for FontSpec {
    type Err = FontSpecError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (family, size) = match input.split_once(':') {
            Some((family, size)) => {
                let size = size
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| FontSpecError::InvalidSize {
                        value: size.trim().to_string(),
                    })?;
                (family, size)
            }
            None => (input, DEFAULT_FONT_SIZE),
        };

        let family = family.trim();
        if family.is_empty() {
            return Err(FontSpecError::EmptyFamily);
        }

        Ok(Self {
            family: family.to_string(),
            size,
        })
    }
}

impl TryFrom<String> for FontSpec {
    type Error = FontSpecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.family, self.size)
    }
}
