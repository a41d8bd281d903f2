//! Design tokens: spacing, typography, and layout constants.
//!
//! Spacing sits on a 4px grid; the type scale follows the page's
//! responsive sizes at their desktop step.

// ── Spacing (4px base grid) ──────────────────────────────────────

pub const SPACE_XXS: f32 = 2.0;
pub const SPACE_XS: f32 = 4.0;
pub const SPACE_SM: f32 = 8.0;
pub const SPACE_MD: f32 = 12.0;
pub const SPACE_LG: f32 = 16.0;
pub const SPACE_XL: f32 = 24.0;
pub const SPACE_2XL: f32 = 32.0;
pub const SPACE_3XL: f32 = 48.0;

// ── Typography ───────────────────────────────────────────────────

pub const TEXT_XS: f32 = 12.0;
pub const TEXT_SM: f32 = 14.0;
pub const TEXT_BASE: f32 = 16.0;
pub const TEXT_LG: f32 = 18.0;
pub const TEXT_XL: f32 = 20.0;
pub const TEXT_2XL: f32 = 24.0;
pub const TEXT_3XL: f32 = 30.0;
pub const TEXT_HERO_ROLE: f32 = 60.0;
pub const TEXT_HERO_NAME: f32 = 84.0;

pub const LINE_HEIGHT_TIGHT: f32 = 1.2;
pub const LINE_HEIGHT_NORMAL: f32 = 1.45;
pub const LINE_HEIGHT_LOOSE: f32 = 1.6;

pub const FONT_HEADING: iced::Font = iced::Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    stretch: iced::font::Stretch::Normal,
    style: iced::font::Style::Normal,
};

pub const FONT_MEDIUM: iced::Font = iced::Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Medium,
    stretch: iced::font::Stretch::Normal,
    style: iced::font::Style::Normal,
};

// ── Layout ───────────────────────────────────────────────────────

pub const CONTENT_MAX_WIDTH: f32 = 1280.0;
pub const CONTACT_MAX_WIDTH: f32 = 1152.0;
pub const NAV_ICON_SIZE: f32 = 20.0;
pub const NAV_BUTTON_PADDING: [f32; 2] = [SPACE_SM, SPACE_MD];
pub const MOBILE_MENU_WIDTH: f32 = 384.0;

// ── Bento grid ───────────────────────────────────────────────────

pub const BENTO_GAP: f32 = SPACE_LG;
pub const BENTO_PADDING: f32 = SPACE_XL;
pub const PROFILE_IMAGE_HEIGHT: f32 = 288.0;
pub const ORNAMENT_SIZE: f32 = 300.0;
pub const BEAM_WIDTH: f32 = 2.0;

// ── Portfolio tree ───────────────────────────────────────────────

pub const TREE_INDENT: f32 = 24.0;
pub const TREE_ICON_SIZE: f32 = 20.0;
pub const PREVIEW_WIDTH: f32 = 238.0;
pub const PREVIEW_HEIGHT: f32 = 159.0;

// ── Contact ──────────────────────────────────────────────────────

pub const CTA_WIDTH: f32 = 160.0;
pub const CTA_HEIGHT: f32 = 40.0;
pub const RIPPLE_DIAMETER_VW: f32 = 60.0;

// ── Border radii ─────────────────────────────────────────────────

pub const RADIUS_SM: f32 = 4.0;
pub const RADIUS_MD: f32 = 8.0;
pub const RADIUS_LG: f32 = 12.0;
pub const RADIUS_PANEL: f32 = 40.0;
pub const RADIUS_FULL: f32 = 9999.0;
