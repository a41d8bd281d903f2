//! Page palette: a single TOML file with light and dark variants.
//!
//! Every view asks for the scheme of the *current* preference when it draws,
//! so a toggle repaints everything on the next frame.

mod catalog;
mod colors;

pub use catalog::*;
pub use colors::*;

use folio_core::theme::ThemePreference;
use iced::Theme;

/// Embedded palette.
pub(crate) const FOLIO_THEME_TOML: &str = include_str!("../assets/themes/folio.toml");

#[derive(Debug, Clone)]
pub struct FolioTheme {
    pub name: String,
    pub dark: ColorScheme,
    pub light: ColorScheme,
}

impl FolioTheme {
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let file: ThemeFile =
            toml::from_str(toml_str).map_err(|e| format!("theme parse error: {e}"))?;
        Ok(Self {
            name: file.meta.name.clone(),
            dark: ColorScheme::from_variant(&file.dark),
            light: ColorScheme::from_variant(&file.light),
        })
    }

    pub fn embedded() -> Self {
        Self::from_toml(FOLIO_THEME_TOML).expect("embedded theme is valid TOML")
    }

    pub fn colors(&self, pref: ThemePreference) -> &ColorScheme {
        match pref {
            ThemePreference::Light => &self.light,
            ThemePreference::Dark => &self.dark,
        }
    }

    pub fn iced_theme(&self, pref: ThemePreference) -> Theme {
        build_theme(&self.name, self.colors(pref))
    }
}

/// Error tint shared by both variants.
pub const DANGER: iced::Color = iced::Color::from_rgb8(0xDC, 0x26, 0x26);

/// What the OS currently prefers, for `mode = "system"`.
pub fn detect_system_preference() -> ThemePreference {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => ThemePreference::Dark,
        _ => ThemePreference::Light,
    }
}

pub fn build_theme(name: &str, cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        name.to_string(),
        Palette {
            background: cs.page,
            text: cs.body,
            primary: cs.accent,
            success: cs.cta,
            warning: cs.accent_hover,
            danger: DANGER,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_theme_parses() {
        let theme = FolioTheme::embedded();
        assert_eq!(theme.name, "Folio");
        assert_eq!(
            theme.colors(ThemePreference::Dark).spiral,
            iced::Color::from_rgb8(0x4C, 0xAF, 0x50)
        );
        assert_eq!(
            theme.colors(ThemePreference::Light).spiral,
            iced::Color::from_rgb8(0x2A, 0x5E, 0x34)
        );
    }
}
