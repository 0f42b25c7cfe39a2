//! Color theme for Tally labels and demo chrome.
//!
//! Kanagawa Wave palette by default with a high-contrast override.

use ratatui::style::Color;

/// Kanagawa Wave color constants.
mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const ACCENT: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const WARNING: Color = Color::Rgb(230, 195, 132); // carpYellow
}

/// Source of the main text color applied to counting labels.
///
/// Injected at label construction; the label captures the color once rather
/// than holding onto the provider.
pub trait ThemeProvider {
    fn main_text_color(&self) -> Color;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub warning: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg: colors::BG_DARK,
            border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            accent: colors::ACCENT,
            warning: colors::WARNING,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            border: Color::Gray,
            text_primary: Color::White,
            text_muted: Color::DarkGray,
            accent: Color::Cyan,
            warning: Color::Yellow,
        }
    }
}

impl ThemeProvider for Palette {
    fn main_text_color(&self) -> Color {
        self.text_primary
    }
}

#[must_use]
pub fn palette(high_contrast: bool) -> Palette {
    if high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_contrast_flag_selects_palette() {
        assert_eq!(palette(true).text_primary, Color::White);
        assert_eq!(palette(false).text_primary, colors::TEXT_PRIMARY);
    }

    #[test]
    fn palette_provides_main_text_color() {
        let theme = Palette::standard();
        assert_eq!(theme.main_text_color(), theme.text_primary);
    }
}
