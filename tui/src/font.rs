//! Font spec resolution onto terminal text treatments.
//!
//! A terminal cell grid has no font families, so a [`FontSpec`] family maps
//! to a named text treatment instead. Unknown families fall back silently to
//! the default treatment. The requested size cannot scale glyphs; it is
//! retained on the resolved font for host layout queries.

use ratatui::style::{Modifier, Style};

use tally_types::FontSpec;

/// Known family names and the treatment each maps to.
const FAMILIES: &[(&str, Modifier)] = &[
    ("default", Modifier::empty()),
    ("mono", Modifier::empty()),
    ("bold", Modifier::BOLD),
    ("dim", Modifier::DIM),
    ("italic", Modifier::ITALIC),
    ("underlined", Modifier::UNDERLINED),
];

/// A font spec resolved against the terminal's capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFont {
    pub modifier: Modifier,
    pub size: u16,
}

impl ResolvedFont {
    #[must_use]
    pub fn style(self) -> Style {
        Style::default().add_modifier(self.modifier)
    }
}

impl Default for ResolvedFont {
    fn default() -> Self {
        resolve_font(&FontSpec::default())
    }
}

#[must_use]
pub fn resolve_font(spec: &FontSpec) -> ResolvedFont {
    let modifier = FAMILIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&spec.family))
        .map(|(_, modifier)| *modifier);

    let modifier = modifier.unwrap_or_else(|| {
        tracing::debug!(family = %spec.family, "unknown font family, using default treatment");
        Modifier::empty()
    });

    ResolvedFont {
        modifier,
        size: spec.size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(family: &str, size: u16) -> FontSpec {
        FontSpec {
            family: family.to_string(),
            size,
        }
    }

    #[test]
    fn known_families_resolve_to_their_treatment() {
        assert_eq!(resolve_font(&spec("bold", 14)).modifier, Modifier::BOLD);
        assert_eq!(resolve_font(&spec("dim", 14)).modifier, Modifier::DIM);
        assert_eq!(resolve_font(&spec("italic", 14)).modifier, Modifier::ITALIC);
    }

    #[test]
    fn family_lookup_ignores_case() {
        assert_eq!(resolve_font(&spec("Bold", 14)).modifier, Modifier::BOLD);
    }

    #[test]
    fn unknown_family_falls_back_silently() {
        let resolved = resolve_font(&spec("Helvetica Neue", 24));
        assert_eq!(resolved.modifier, Modifier::empty());
        assert_eq!(resolved.size, 24);
    }

    #[test]
    fn size_is_retained() {
        assert_eq!(resolve_font(&spec("bold", 32)).size, 32);
    }
}
