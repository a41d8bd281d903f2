//! Page chrome state: the mobile menu overlay and the project preview
//! tooltip, plus the navigation action that ties the menu to the nav state.

use crate::navigation::{NavTracker, Section};
use crate::theme::{ThemePreference, ThemeStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.set(true);
    }

    pub fn close(&mut self) {
        self.set(false);
    }

    pub fn toggle(&mut self) {
        self.set(!self.open);
    }

    fn set(&mut self, open: bool) {
        if self.open != open {
            tracing::debug!(open, "Mobile menu");
        }
        self.open = open;
    }
}

/// Navigation state plus the menu that can trigger it.
#[derive(Debug, Clone, Default)]
pub struct PageShell {
    pub menu: MobileMenu,
    pub nav: NavTracker,
}

impl PageShell {
    /// Jump to `section` from the nav bar or the mobile menu.
    ///
    /// The section is highlighted at once and the menu closes; the caller
    /// starts the scroll animation towards the returned section.
    pub fn navigate(&mut self, section: Section) -> Section {
        self.menu.close();
        self.nav.select(section);
        section
    }

    /// Theme button inside the mobile menu: toggles and closes.
    pub fn toggle_theme_from_menu(&mut self, theme: &ThemeStore) -> ThemePreference {
        let pref = theme.toggle();
        self.menu.close();
        pref
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Offset of the preview from the pointer: right and up.
pub const PREVIEW_OFFSET: Position = Position { x: 10.0, y: -10.0 };

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreviewTooltip {
    image_url: Option<String>,
    pointer: Position,
}

impl PreviewTooltip {
    /// Show `image_url` next to the pointer.
    pub fn show(&mut self, image_url: impl Into<String>, pointer: Position) {
        self.image_url = Some(image_url.into());
        self.pointer = pointer;
    }

    /// Follow the pointer while the preview is up.
    pub fn move_to(&mut self, pointer: Position) {
        self.pointer = pointer;
    }

    pub fn hide(&mut self) {
        self.image_url = None;
    }

    /// Any scroll hides the preview.
    pub fn on_scroll(&mut self) {
        self.hide();
    }

    pub fn is_visible(&self) -> bool {
        self.image_url.is_some()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Top-left corner of the preview.
    pub fn anchor(&self) -> Position {
        Position::new(
            self.pointer.x + PREVIEW_OFFSET.x,
            self.pointer.y + PREVIEW_OFFSET.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::motion::SmoothScroll;
    use crate::viewport::{SectionLayout, ViewportMetrics};

    #[test]
    fn test_menu_toggles() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.open();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigate_closes_menu_and_selects_section() {
        for &section in Section::ALL {
            let mut shell = PageShell::default();
            shell.menu.open();
            assert_eq!(shell.navigate(section), section);
            assert!(!shell.menu.is_open());
            assert_eq!(shell.nav.active_section(), section);
        }
    }

    #[test]
    fn test_smooth_scroll_settles_on_clicked_section() {
        let viewport = ViewportMetrics::new(1440.0, 800.0);
        let layout = SectionLayout::new(viewport, 1500.0);
        let anchors = layout.anchors();

        for &section in Section::ALL {
            for &start in Section::ALL {
                let mut shell = PageShell::default();
                let from = layout.top(start).min(layout.max_scroll());
                shell.nav.on_scroll(from, viewport.height(), &anchors);

                shell.navigate(section);
                let mut scroll =
                    SmoothScroll::new(from, layout.top(section).min(layout.max_scroll()));
                while !scroll.is_finished() {
                    let y = scroll.step(Duration::from_millis(16));
                    shell.nav.on_scroll(y, viewport.height(), &anchors);
                }

                assert_eq!(
                    shell.nav.active_section(),
                    section,
                    "scrolling from {start} to {section}"
                );
            }
        }
    }

    #[test]
    fn test_menu_theme_button_toggles_and_closes() {
        let theme = ThemeStore::default();
        let mut shell = PageShell::default();
        shell.menu.open();
        assert_eq!(shell.toggle_theme_from_menu(&theme), ThemePreference::Dark);
        assert!(!shell.menu.is_open());
        assert_eq!(theme.current(), ThemePreference::Dark);
    }

    #[test]
    fn test_preview_offset_and_scroll_hide() {
        let mut preview = PreviewTooltip::default();
        assert!(!preview.is_visible());

        preview.show("https://img.example/a.png", Position::new(100.0, 200.0));
        assert_eq!(preview.anchor(), Position::new(110.0, 190.0));
        assert_eq!(preview.image_url(), Some("https://img.example/a.png"));

        preview.move_to(Position::new(0.0, 0.0));
        assert_eq!(preview.anchor(), Position::new(10.0, -10.0));

        preview.on_scroll();
        assert!(!preview.is_visible());
    }
}
