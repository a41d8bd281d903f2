//! Scroll-driven navigation state: which section is active, and whether the
//! page has scrolled far enough to dock the nav bar higher.

use serde::Serialize;

/// Page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Knowledge,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: &[Section] = &[
        Self::Home,
        Self::Knowledge,
        Self::Portfolio,
        Self::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Knowledge => "knowledge",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
        }
    }

    /// Label in the nav menu.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Knowledge => "About me",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measured top offsets of the section anchors.
///
/// `None` means the anchor has not been laid out yet; it reads as 0, which
/// puts that boundary at the top of the page instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorOffsets {
    pub knowledge: Option<f32>,
    pub portfolio: Option<f32>,
    pub contact: Option<f32>,
}

impl AnchorOffsets {
    pub fn new(knowledge: f32, portfolio: f32, contact: f32) -> Self {
        Self {
            knowledge: Some(knowledge),
            portfolio: Some(portfolio),
            contact: Some(contact),
        }
    }

    /// Top offset of `section`; home always starts at 0.
    pub fn top(&self, section: Section) -> f32 {
        match section {
            Section::Home => 0.0,
            Section::Knowledge => self.knowledge.unwrap_or(0.0),
            Section::Portfolio => self.portfolio.unwrap_or(0.0),
            Section::Contact => self.contact.unwrap_or(0.0),
        }
    }
}

/// Fraction of the viewport height past which the nav bar docks higher.
pub const SCROLL_THRESHOLD_RATIO: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavigationState {
    pub active_section: Section,
    pub scrolled_past_threshold: bool,
}

impl NavigationState {
    /// Derive the state from one scroll sample.
    pub fn derive(scroll_y: f32, viewport_height: f32, anchors: &AnchorOffsets) -> Self {
        Self {
            active_section: active_section(scroll_y, viewport_height, anchors),
            scrolled_past_threshold: scrolled_past_threshold(scroll_y, viewport_height),
        }
    }
}

/// The section containing the probe line at mid-viewport.
///
/// A probe exactly on a boundary belongs to the section below it.
pub fn active_section(scroll_y: f32, viewport_height: f32, anchors: &AnchorOffsets) -> Section {
    let probe = scroll_y + viewport_height / 2.0;
    if probe < anchors.top(Section::Knowledge) {
        Section::Home
    } else if probe < anchors.top(Section::Portfolio) {
        Section::Knowledge
    } else if probe < anchors.top(Section::Contact) {
        Section::Portfolio
    } else {
        Section::Contact
    }
}

pub fn scrolled_past_threshold(scroll_y: f32, viewport_height: f32) -> bool {
    scroll_y > viewport_height * SCROLL_THRESHOLD_RATIO
}

/// Holds the latest navigation state.
///
/// Every update recomputes from its own inputs, so whichever event is
/// processed last determines the state.
#[derive(Debug, Clone, Default)]
pub struct NavTracker {
    state: NavigationState,
}

impl NavTracker {
    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn active_section(&self) -> Section {
        self.state.active_section
    }

    /// Apply a scroll sample (or the initial measurement at mount).
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32, anchors: &AnchorOffsets) {
        let next = NavigationState::derive(scroll_y, viewport_height, anchors);
        if next.active_section != self.state.active_section {
            tracing::debug!(
                from = %self.state.active_section,
                to = %next.active_section,
                scroll_y,
                "Active section changed"
            );
        }
        self.state = next;
    }

    /// Highlight `section` right away, as when a nav entry is clicked.
    pub fn select(&mut self, section: Section) {
        self.state.active_section = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> AnchorOffsets {
        AnchorOffsets::new(1000.0, 3000.0, 5000.0)
    }

    #[test]
    fn test_bands() {
        let a = anchors();
        assert_eq!(active_section(0.0, 800.0, &a), Section::Home);
        assert_eq!(active_section(700.0, 800.0, &a), Section::Knowledge);
        assert_eq!(active_section(2700.0, 800.0, &a), Section::Portfolio);
        assert_eq!(active_section(4700.0, 800.0, &a), Section::Contact);
    }

    #[test]
    fn test_boundary_belongs_to_section_below() {
        let a = anchors();
        // probe = 600 + 400 = 1000, exactly the knowledge anchor.
        assert_eq!(active_section(600.0, 800.0, &a), Section::Knowledge);
        assert_eq!(active_section(599.0, 800.0, &a), Section::Home);
        assert_eq!(active_section(2600.0, 800.0, &a), Section::Portfolio);
        assert_eq!(active_section(4600.0, 800.0, &a), Section::Contact);
    }

    #[test]
    fn test_threshold() {
        assert!(!scrolled_past_threshold(119.0, 800.0));
        assert!(!scrolled_past_threshold(120.0, 800.0));
        assert!(scrolled_past_threshold(121.0, 800.0));
    }

    #[test]
    fn test_unmeasured_anchors_read_as_zero() {
        let none = AnchorOffsets::default();
        assert_eq!(none.top(Section::Portfolio), 0.0);
        // Every boundary sits at 0, so any probe lands in the last band.
        assert_eq!(active_section(0.0, 800.0, &none), Section::Contact);

        let partial = AnchorOffsets {
            knowledge: Some(1000.0),
            portfolio: None,
            contact: None,
        };
        assert_eq!(active_section(0.0, 800.0, &partial), Section::Home);
        assert_eq!(active_section(700.0, 800.0, &partial), Section::Contact);
    }

    #[test]
    fn test_last_event_wins() {
        let a = anchors();
        let mut tracker = NavTracker::default();
        tracker.on_scroll(4700.0, 800.0, &a);
        tracker.on_scroll(0.0, 800.0, &a);
        assert_eq!(
            tracker.state(),
            NavigationState {
                active_section: Section::Home,
                scrolled_past_threshold: false
            }
        );
    }

    #[test]
    fn test_select_overrides_until_next_scroll() {
        let a = anchors();
        let mut tracker = NavTracker::default();
        tracker.select(Section::Portfolio);
        assert_eq!(tracker.active_section(), Section::Portfolio);
        tracker.on_scroll(0.0, 800.0, &a);
        assert_eq!(tracker.active_section(), Section::Home);
    }
}
