//! Style functions parameterized by ColorScheme.
//!
//! Each function returns a closure suitable for Iced's `.style()` method,
//! capturing the needed color tokens from a `ColorScheme`.

use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::style;

use super::ColorScheme;

fn soft_shadow(alpha: f32) -> Shadow {
    Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, alpha),
        offset: Vector::new(0.0, 4.0),
        blur_radius: 6.0,
    }
}

/// Full-window page background.
pub fn page_background(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.page;
    let text = cs.body;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Translucent bento card with a hairline border.
pub fn bento_card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.card;
    let border_color = cs.card_border;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_LG.into(),
        },
        shadow: soft_shadow(0.08),
        ..Default::default()
    }
}

/// Floating pill behind the nav buttons.
pub fn nav_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = Color {
        a: cs.nav.a * 0.95,
        ..cs.nav
    };
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            radius: style::RADIUS_FULL.into(),
            ..Border::default()
        },
        shadow: soft_shadow(0.15),
        ..Default::default()
    }
}

/// Nav entry: tinted pill when its section is active.
pub fn nav_item(active: bool, cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let nav_active = cs.nav_active;
    let nav_hover = cs.nav_hover;
    let nav_text = cs.nav_text;
    let accent = cs.accent;

    move |_theme, status| {
        let (bg, text_color) = if active {
            (Some(Background::Color(nav_active)), accent)
        } else {
            match status {
                button::Status::Hovered => (Some(Background::Color(nav_hover)), accent),
                _ => (None, nav_text),
            }
        };
        button::Style {
            background: bg,
            text_color,
            border: Border {
                radius: style::RADIUS_FULL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Transparent round icon button (theme toggle, hamburger, close).
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let nav_hover = cs.nav_hover;
    let nav_text = cs.nav_text;
    let accent = cs.accent;

    move |_theme, status| {
        let (bg, text_color) = match status {
            button::Status::Hovered => (Some(Background::Color(nav_hover)), accent),
            _ => (None, nav_text),
        };
        button::Style {
            background: bg,
            text_color,
            border: Border {
                radius: style::RADIUS_FULL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Row of the portfolio tree.
pub fn tree_row(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let hover = cs.chip;
    let body = cs.body;

    move |_theme, status| button::Style {
        background: match status {
            button::Status::Hovered => Some(Background::Color(hover)),
            _ => None,
        },
        text_color: body,
        border: Border {
            radius: style::RADIUS_MD.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Inline text link; shifts to the hover accent.
pub fn link_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let body = cs.body;
    let hover = cs.accent_hover;

    move |_theme, status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => hover,
            _ => body,
        },
        ..Default::default()
    }
}

/// Small rounded pill with a tinted background.
pub fn badge(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.badge;
    let text = cs.on_badge;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        border: Border {
            radius: style::RADIUS_FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Tool stack tile.
pub fn tool_chip(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.chip;
    let text = cs.heading;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        border: Border {
            radius: style::RADIUS_MD.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Chip-shaped action button (résumé download, copy e-mail).
pub fn chip_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let chip = cs.chip;
    let chip_hover = cs.chip_hover;
    let text = cs.heading;

    move |_theme, status| button::Style {
        background: Some(Background::Color(match status {
            button::Status::Hovered | button::Status::Pressed => chip_hover,
            _ => chip,
        })),
        text_color: text,
        border: Border {
            radius: style::RADIUS_MD.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// "Lets have a chat" call-to-action.
pub fn cta_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let cta = cs.cta;
    let cta_hover = cs.cta_hover;
    let on_cta = cs.on_cta;

    move |_theme, status| button::Style {
        background: Some(Background::Color(match status {
            button::Status::Hovered | button::Status::Pressed => cta_hover,
            _ => cta,
        })),
        text_color: on_cta,
        border: Border {
            radius: style::RADIUS_MD.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Frosted panel holding the contact copy.
pub fn contact_panel(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.contact_panel;
    let border_color = cs.contact_border;
    let text = cs.contact_text;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_PANEL.into(),
        },
        ..Default::default()
    }
}

/// Slide-in panel of the mobile menu.
pub fn menu_panel(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.overlay;
    let text = cs.heading;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        shadow: soft_shadow(0.25),
        ..Default::default()
    }
}

/// Notice pill in the toast stack.
pub fn toast_pill(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let bg = cs.overlay;
    let hover = cs.chip_hover;
    let text = cs.heading;

    move |_theme, status| button::Style {
        background: Some(Background::Color(match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            _ => bg,
        })),
        text_color: text,
        border: Border {
            radius: style::RADIUS_PANEL.into(),
            ..Border::default()
        },
        shadow: soft_shadow(0.2),
        ..Default::default()
    }
}

/// Dimmed backdrop behind the mobile menu.
pub fn scrim(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.scrim;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// White frame around the hover preview.
pub fn preview_frame(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.preview;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            radius: style::RADIUS_MD.into(),
            ..Border::default()
        },
        shadow: soft_shadow(0.3),
        ..Default::default()
    }
}

/// Placeholder while an image is loading or after it failed.
pub fn image_placeholder(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.chip;
    let text = cs.subtle;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        border: Border {
            radius: style::RADIUS_MD.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Thin overlay scrollbar for the page; the scroller firms up on hover/drag.
pub fn page_scrollbar(cs: &ColorScheme) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let body = cs.body;
    let accent = cs.accent;

    move |_theme, status| {
        let (scroller_color, scroller_alpha) = match status {
            scrollable::Status::Dragged { .. } => (accent, 0.7),
            scrollable::Status::Hovered {
                is_vertical_scrollbar_hovered: true,
                ..
            } => (body, 0.5),
            scrollable::Status::Hovered { .. } => (body, 0.25),
            _ => (body, 0.15),
        };

        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(Color {
                    a: scroller_alpha,
                    ..scroller_color
                }),
                border: Border {
                    radius: style::RADIUS_FULL.into(),
                    ..Border::default()
                },
            },
        };

        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::AutoScroll {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                shadow: Shadow::default(),
                icon: body,
            },
        }
    }
}
