//! Viewport measurements and the vertical layout of the page sections.

use crate::navigation::{AnchorOffsets, Section};

/// Widths below this use the mobile layout.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Share of a section that must intersect the viewport to count as in view.
pub const IN_VIEW_AMOUNT: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    width: f32,
    height: f32,
}

impl ViewportMetrics {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// 1% of the viewport height.
    pub fn vh_unit(&self) -> f32 {
        self.height / 100.0
    }

    /// `n` vh in pixels.
    pub fn vh(&self, n: f32) -> f32 {
        n * self.vh_unit()
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    /// Apply a window resize. Returns whether anything changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let next = Self::new(width, height);
        if next == *self {
            return false;
        }
        tracing::debug!(width, height, vh_unit = next.vh_unit(), "Viewport resized");
        *self = next;
        true
    }
}

/// Heights and tops of the four stacked sections.
///
/// Every section is at least one viewport tall; the knowledge section grows
/// to fit its bento grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    viewport: ViewportMetrics,
    bento_height: f32,
}

impl SectionLayout {
    pub fn new(viewport: ViewportMetrics, bento_height: f32) -> Self {
        Self {
            viewport,
            bento_height,
        }
    }

    pub fn height(&self, section: Section) -> f32 {
        let full = self.viewport.vh(100.0);
        match section {
            Section::Knowledge => full.max(self.bento_height),
            Section::Home | Section::Portfolio | Section::Contact => full,
        }
    }

    pub fn top(&self, section: Section) -> f32 {
        Section::ALL
            .iter()
            .take_while(|&&s| s != section)
            .map(|&s| self.height(s))
            .sum()
    }

    pub fn anchors(&self) -> AnchorOffsets {
        AnchorOffsets::new(
            self.top(Section::Knowledge),
            self.top(Section::Portfolio),
            self.top(Section::Contact),
        )
    }

    pub fn page_height(&self) -> f32 {
        Section::ALL.iter().map(|&s| self.height(s)).sum()
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.page_height() - self.viewport.height()).max(0.0)
    }

    /// Scroll position as a share of the page height.
    pub fn scroll_progress(&self, scroll_y: f32) -> f32 {
        let page = self.page_height();
        if page <= 0.0 {
            return 0.0;
        }
        (scroll_y / page).clamp(0.0, 1.0)
    }

    /// Share of `section` currently inside the viewport.
    pub fn visible_ratio(&self, section: Section, scroll_y: f32) -> f32 {
        intersection_ratio(
            self.top(section),
            self.height(section),
            scroll_y,
            self.viewport.height(),
        )
    }

    pub fn is_in_view(&self, section: Section, scroll_y: f32) -> bool {
        self.visible_ratio(section, scroll_y) >= IN_VIEW_AMOUNT
    }
}

/// Share of an element `[top, top + height)` inside the viewport
/// `[scroll_y, scroll_y + viewport_height)`.
pub fn intersection_ratio(top: f32, height: f32, scroll_y: f32, viewport_height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let visible_top = top.max(scroll_y);
    let visible_bottom = (top + height).min(scroll_y + viewport_height);
    ((visible_bottom - visible_top) / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vh_unit_follows_resize() {
        let mut viewport = ViewportMetrics::new(1280.0, 800.0);
        assert_eq!(viewport.vh_unit(), 8.0);
        assert!(viewport.resize(1280.0, 600.0));
        assert_eq!(viewport.vh_unit(), 6.0);
        assert!(!viewport.resize(1280.0, 600.0));
    }

    #[test]
    fn test_mobile_breakpoint() {
        assert!(ViewportMetrics::new(767.0, 800.0).is_mobile());
        assert!(!ViewportMetrics::new(768.0, 800.0).is_mobile());
    }

    #[test]
    fn test_anchors_are_cumulative() {
        let layout = SectionLayout::new(ViewportMetrics::new(1280.0, 800.0), 1200.0);
        assert_eq!(layout.anchors(), AnchorOffsets::new(800.0, 2000.0, 2800.0));
        assert_eq!(layout.page_height(), 3600.0);
        assert_eq!(layout.max_scroll(), 2800.0);
    }

    #[test]
    fn test_short_bento_keeps_full_viewport_height() {
        let layout = SectionLayout::new(ViewportMetrics::new(1280.0, 800.0), 300.0);
        assert_eq!(layout.height(Section::Knowledge), 800.0);
    }

    #[test]
    fn test_in_view_needs_ten_percent() {
        let layout = SectionLayout::new(ViewportMetrics::new(1280.0, 800.0), 800.0);
        // Portfolio spans [1600, 2400); 80 px visible is exactly 10%.
        assert!(layout.is_in_view(Section::Portfolio, 880.0));
        assert!(!layout.is_in_view(Section::Portfolio, 870.0));
        assert!(layout.is_in_view(Section::Home, 0.0));
        assert!(!layout.is_in_view(Section::Home, 800.0));
    }

    #[test]
    fn test_intersection_ratio_edges() {
        assert_eq!(intersection_ratio(0.0, 0.0, 0.0, 800.0), 0.0);
        assert_eq!(intersection_ratio(0.0, 400.0, 0.0, 800.0), 1.0);
        assert_eq!(intersection_ratio(1000.0, 400.0, 0.0, 800.0), 0.0);
        assert_eq!(intersection_ratio(600.0, 400.0, 0.0, 800.0), 0.5);
    }

    #[test]
    fn test_scroll_progress_clamps() {
        let layout = SectionLayout::new(ViewportMetrics::new(1280.0, 800.0), 800.0);
        assert_eq!(layout.scroll_progress(800.0), 0.25);
        assert_eq!(layout.scroll_progress(-5.0), 0.0);
        assert_eq!(layout.scroll_progress(1e9), 1.0);
    }
}
