//! Semantic color tokens for the page.
//!
//! Deserialized from the TOML theme file via hex color strings.

use iced::Color;
use serde::Deserialize;

// ── Hex color serde ─────────────────────────────────────────────────

mod hex_color {
    use iced::Color;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_hex_color(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`.
pub fn parse_hex_color(s: &str) -> Result<Color, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let byte = |range: std::ops::Range<usize>| {
        hex.get(range)
            .ok_or_else(|| format!("invalid hex color: {s}"))
            .and_then(|h| u8::from_str_radix(h, 16).map_err(|e| e.to_string()))
    };
    match hex.len() {
        6 => Ok(Color::from_rgb8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        8 => Ok(Color::from_rgba8(
            byte(0..2)?,
            byte(2..4)?,
            byte(4..6)?,
            byte(6..8)? as f32 / 255.0,
        )),
        _ => Err(format!("invalid hex color: {s}")),
    }
}

// ── TOML intermediate structs ──────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ThemeFile {
    pub meta: ThemeMeta,
    pub dark: ThemeVariant,
    pub light: ThemeVariant,
}

#[derive(Debug, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ThemeVariant {
    pub surface: SurfaceColors,
    pub text: TextColors,
    pub accent: AccentColors,
    pub badge: BadgeColors,
    pub contact: ContactColors,
    pub ornament: OrnamentColors,
}

#[derive(Debug, Deserialize)]
pub struct SurfaceColors {
    #[serde(with = "hex_color")]
    pub page: Color,
    #[serde(with = "hex_color")]
    pub card: Color,
    #[serde(with = "hex_color")]
    pub card_border: Color,
    #[serde(with = "hex_color")]
    pub nav: Color,
    #[serde(with = "hex_color")]
    pub overlay: Color,
    #[serde(with = "hex_color")]
    pub scrim: Color,
    #[serde(with = "hex_color")]
    pub preview: Color,
}

#[derive(Debug, Deserialize)]
pub struct TextColors {
    #[serde(with = "hex_color")]
    pub heading: Color,
    #[serde(with = "hex_color")]
    pub body: Color,
    #[serde(with = "hex_color")]
    pub muted: Color,
    #[serde(with = "hex_color")]
    pub subtle: Color,
}

#[derive(Debug, Deserialize)]
pub struct AccentColors {
    #[serde(with = "hex_color")]
    pub base: Color,
    #[serde(with = "hex_color")]
    pub hover: Color,
    #[serde(with = "hex_color")]
    pub nav_text: Color,
    #[serde(with = "hex_color")]
    pub nav_active: Color,
    #[serde(with = "hex_color")]
    pub nav_hover: Color,
    #[serde(with = "hex_color")]
    pub cta: Color,
    #[serde(with = "hex_color")]
    pub cta_hover: Color,
    #[serde(with = "hex_color")]
    pub on_cta: Color,
}

#[derive(Debug, Deserialize)]
pub struct BadgeColors {
    #[serde(with = "hex_color")]
    pub background: Color,
    #[serde(with = "hex_color")]
    pub text: Color,
    #[serde(with = "hex_color")]
    pub chip: Color,
    #[serde(with = "hex_color")]
    pub chip_hover: Color,
}

#[derive(Debug, Deserialize)]
pub struct ContactColors {
    #[serde(with = "hex_color")]
    pub panel: Color,
    #[serde(with = "hex_color")]
    pub border: Color,
    #[serde(with = "hex_color")]
    pub text: Color,
    #[serde(with = "hex_color")]
    pub tagline: Color,
}

#[derive(Debug, Deserialize)]
pub struct OrnamentColors {
    #[serde(with = "hex_color")]
    pub spiral: Color,
    #[serde(with = "hex_color")]
    pub ripple: Color,
    #[serde(with = "hex_color")]
    pub dots: Color,
    #[serde(with = "hex_color")]
    pub beam_from: Color,
    #[serde(with = "hex_color")]
    pub beam_to: Color,
    #[serde(with = "hex_color")]
    pub tree_icon: Color,
}

// ── ColorScheme ────────────────────────────────────────────────────

/// All semantic color tokens for one appearance.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces
    pub page: Color,
    pub card: Color,
    pub card_border: Color,
    pub nav: Color,
    pub overlay: Color,
    pub scrim: Color,
    pub preview: Color,

    // Text hierarchy
    pub heading: Color,
    pub body: Color,
    pub muted: Color,
    pub subtle: Color,

    // Accent (green)
    pub accent: Color,
    pub accent_hover: Color,
    pub nav_text: Color,
    pub nav_active: Color,
    pub nav_hover: Color,
    pub cta: Color,
    pub cta_hover: Color,
    pub on_cta: Color,

    // Pills
    pub badge: Color,
    pub on_badge: Color,
    pub chip: Color,
    pub chip_hover: Color,

    // Contact panel
    pub contact_panel: Color,
    pub contact_border: Color,
    pub contact_text: Color,
    pub tagline: Color,

    // Decorations
    pub spiral: Color,
    pub ripple: Color,
    pub dots: Color,
    pub beam_from: Color,
    pub beam_to: Color,
    pub tree_icon: Color,
}

impl ColorScheme {
    pub fn from_variant(v: &ThemeVariant) -> Self {
        Self {
            page: v.surface.page,
            card: v.surface.card,
            card_border: v.surface.card_border,
            nav: v.surface.nav,
            overlay: v.surface.overlay,
            scrim: v.surface.scrim,
            preview: v.surface.preview,

            heading: v.text.heading,
            body: v.text.body,
            muted: v.text.muted,
            subtle: v.text.subtle,

            accent: v.accent.base,
            accent_hover: v.accent.hover,
            nav_text: v.accent.nav_text,
            nav_active: v.accent.nav_active,
            nav_hover: v.accent.nav_hover,
            cta: v.accent.cta,
            cta_hover: v.accent.cta_hover,
            on_cta: v.accent.on_cta,

            badge: v.badge.background,
            on_badge: v.badge.text,
            chip: v.badge.chip,
            chip_hover: v.badge.chip_hover,

            contact_panel: v.contact.panel,
            contact_border: v.contact.border,
            contact_text: v.contact.text,
            tagline: v.contact.tagline,

            spiral: v.ornament.spiral,
            ripple: v.ornament.ripple,
            dots: v.ornament.dots,
            beam_from: v.ornament.beam_from,
            beam_to: v.ornament.beam_to,
            tree_icon: v.ornament.tree_icon,
        }
    }

    /// Copy with every foreground color scaled by `opacity`.
    ///
    /// Used for sections that fade in and out with scrolling.
    pub fn faded(&self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity >= 1.0 {
            return self.clone();
        }
        let fade = |c: Color| Color {
            a: c.a * opacity,
            ..c
        };
        Self {
            card: fade(self.card),
            card_border: fade(self.card_border),
            heading: fade(self.heading),
            body: fade(self.body),
            muted: fade(self.muted),
            subtle: fade(self.subtle),
            accent: fade(self.accent),
            cta: fade(self.cta),
            on_cta: fade(self.on_cta),
            badge: fade(self.badge),
            on_badge: fade(self.on_badge),
            chip: fade(self.chip),
            contact_panel: fade(self.contact_panel),
            contact_border: fade(self.contact_border),
            contact_text: fade(self.contact_text),
            tagline: fade(self.tagline),
            spiral: fade(self.spiral),
            ripple: fade(self.ripple),
            beam_from: fade(self.beam_from),
            beam_to: fade(self.beam_to),
            tree_icon: fade(self.tree_icon),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let c = parse_hex_color("#4CAF50").unwrap();
        assert_eq!(c, Color::from_rgb8(0x4C, 0xAF, 0x50));
        let a = parse_hex_color("#00000080").unwrap();
        assert!((a.a - 128.0 / 255.0).abs() < 1e-6);
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#GG0000").is_err());
    }
}
