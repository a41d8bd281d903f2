//! Time-based interpolation for the page's animated values.
//!
//! Everything here is driven by explicit elapsed durations so the GUI can
//! feed frame deltas and tests can feed exact numbers.

use std::time::Duration;

/// A CSS-style cubic Bézier timing curve through (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// `ease-in-out` as used by the nav bar and smooth scrolling.
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

/// Timing curve of the contact section ripples.
pub const RIPPLE_EASE: CubicBezier = CubicBezier::new(0.65, 0.0, 0.35, 1.0);

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn axis(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    /// Map linear progress `x ∈ [0, 1]` to eased progress.
    pub fn sample(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        // x(t) is monotonic for control points inside [0, 1]; bisect for t.
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        let mut t = x;
        for _ in 0..32 {
            let current = Self::axis(t, self.x1, self.x2);
            if (current - x).abs() < 1e-5 {
                break;
            }
            if current < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::axis(t, self.y1, self.y2)
    }
}

/// A value moving from `from` to `to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
}

impl Tween {
    /// A tween already at rest on `value`.
    pub fn settled(value: f32, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: duration,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * EASE_IN_OUT.sample(self.progress())
    }

    /// Head for `to`, starting from wherever the tween currently is.
    pub fn retarget(&mut self, to: f32) {
        if (to - self.to).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value();
        self.to = to;
        self.elapsed = Duration::ZERO;
    }

    /// Jump straight to `value` with no animation.
    pub fn snap(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.elapsed = self.duration;
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }
}

/// Nav bar top offset as a fraction of the viewport height.
pub const NAV_TOP_RESTING: f32 = 0.15;
pub const NAV_TOP_SCROLLED: f32 = 0.05;
pub const NAV_TRANSITION: Duration = Duration::from_millis(300);

/// Vertical position of the floating nav bar.
///
/// Switches between the two presets with a 0.3 s ease-in-out instead of
/// jumping.
#[derive(Debug, Clone, PartialEq)]
pub struct NavBarMotion {
    tween: Tween,
    scrolled: bool,
}

impl Default for NavBarMotion {
    fn default() -> Self {
        Self {
            tween: Tween::settled(NAV_TOP_RESTING, NAV_TRANSITION),
            scrolled: false,
        }
    }
}

impl NavBarMotion {
    pub fn set_scrolled(&mut self, scrolled: bool) {
        if scrolled == self.scrolled {
            return;
        }
        self.scrolled = scrolled;
        self.tween.retarget(if scrolled {
            NAV_TOP_SCROLLED
        } else {
            NAV_TOP_RESTING
        });
    }

    pub fn advance(&mut self, dt: Duration) {
        self.tween.advance(dt);
    }

    pub fn is_animating(&self) -> bool {
        !self.tween.is_finished()
    }

    /// Current top offset as a fraction of the viewport height.
    pub fn top_fraction(&self) -> f32 {
        self.tween.value()
    }

    pub fn top_px(&self, viewport_height: f32) -> f32 {
        self.top_fraction() * viewport_height
    }
}

pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(600);

/// Animated scroll towards an anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    tween: Tween,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32) -> Self {
        let mut tween = Tween::settled(from, SMOOTH_SCROLL_DURATION);
        tween.retarget(to);
        Self { tween }
    }

    pub fn target(&self) -> f32 {
        self.tween.target()
    }

    /// Advance and return the offset to scroll to.
    pub fn step(&mut self, dt: Duration) -> f32 {
        self.tween.advance(dt);
        self.tween.value()
    }

    pub fn is_finished(&self) -> bool {
        self.tween.is_finished()
    }
}

/// Hero opacity and scale for the current page scroll progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFade {
    pub opacity: f32,
    pub scale: f32,
}

/// Scroll progress over which the hero fades out.
const HERO_FADE_END: f32 = 0.25;

/// `progress` is the page scroll position over the page height.
pub fn hero_fade(progress: f32) -> HeroFade {
    let t = (progress / HERO_FADE_END).clamp(0.0, 1.0);
    HeroFade {
        opacity: 1.0 - t,
        scale: 1.0 - 0.2 * t,
    }
}

/// One ring of the contact background animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleFrame {
    pub scale: f32,
    pub opacity: f32,
}

pub const RIPPLE_PERIOD: Duration = Duration::from_secs(4);

/// Phase leads of the three rings (negative animation delays).
pub const RIPPLE_LEADS: [Duration; 3] = [
    Duration::ZERO,
    Duration::from_secs(1),
    Duration::from_secs(2),
];

pub fn ripple_frame(elapsed: Duration, lead: Duration) -> RippleFrame {
    let period = RIPPLE_PERIOD.as_secs_f32();
    let t = ((elapsed + lead).as_secs_f32() % period) / period;
    let eased = RIPPLE_EASE.sample(t);
    RippleFrame {
        scale: 0.8 + 0.4 * eased,
        opacity: 0.8 * (1.0 - eased),
    }
}

/// Fraction of a card outline covered by its border beam.
pub fn beam_progress(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() % period.as_secs_f32()) / period.as_secs_f32()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_bezier_endpoints_and_symmetry() {
        assert_eq!(EASE_IN_OUT.sample(0.0), 0.0);
        assert_eq!(EASE_IN_OUT.sample(1.0), 1.0);
        assert!(close(EASE_IN_OUT.sample(0.5), 0.5));
        assert!(EASE_IN_OUT.sample(0.25) < 0.25);
        assert!(EASE_IN_OUT.sample(0.75) > 0.75);
    }

    #[test]
    fn test_nav_bar_interpolates_over_300ms() {
        let mut nav = NavBarMotion::default();
        assert!(close(nav.top_fraction(), NAV_TOP_RESTING));
        assert!(!nav.is_animating());

        nav.set_scrolled(true);
        assert!(nav.is_animating());
        assert!(close(nav.top_fraction(), NAV_TOP_RESTING));

        nav.advance(Duration::from_millis(150));
        let mid = nav.top_fraction();
        assert!(mid < NAV_TOP_RESTING && mid > NAV_TOP_SCROLLED);

        nav.advance(Duration::from_millis(150));
        assert!(!nav.is_animating());
        assert!(close(nav.top_fraction(), NAV_TOP_SCROLLED));
        assert!(close(nav.top_px(800.0), 40.0));
    }

    #[test]
    fn test_nav_bar_retargets_mid_flight() {
        let mut nav = NavBarMotion::default();
        nav.set_scrolled(true);
        nav.advance(Duration::from_millis(100));
        let at_flip = nav.top_fraction();

        nav.set_scrolled(false);
        assert!(close(nav.top_fraction(), at_flip));
        nav.advance(NAV_TRANSITION);
        assert!(close(nav.top_fraction(), NAV_TOP_RESTING));
    }

    #[test]
    fn test_repeated_flag_does_not_restart() {
        let mut nav = NavBarMotion::default();
        nav.set_scrolled(true);
        nav.advance(Duration::from_millis(200));
        let before = nav.top_fraction();
        nav.set_scrolled(true);
        assert!(close(nav.top_fraction(), before));
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut scroll = SmoothScroll::new(0.0, 3000.0);
        let first = scroll.step(Duration::from_millis(16));
        assert!(first > 0.0 && first < 3000.0);
        let last = scroll.step(SMOOTH_SCROLL_DURATION);
        assert!(scroll.is_finished());
        assert!(close(last, 3000.0));
    }

    #[test]
    fn test_hero_fade() {
        assert_eq!(hero_fade(0.0), HeroFade { opacity: 1.0, scale: 1.0 });
        let half = hero_fade(0.125);
        assert!(close(half.opacity, 0.5));
        assert!(close(half.scale, 0.9));
        let gone = hero_fade(0.6);
        assert!(close(gone.opacity, 0.0));
        assert!(close(gone.scale, 0.8));
    }

    #[test]
    fn test_ripple_frames() {
        let start = ripple_frame(Duration::ZERO, Duration::ZERO);
        assert!(close(start.scale, 0.8));
        assert!(close(start.opacity, 0.8));

        // A 2 s lead is half a period ahead.
        let led = ripple_frame(Duration::ZERO, RIPPLE_LEADS[2]);
        let later = ripple_frame(Duration::from_secs(2), Duration::ZERO);
        assert!(close(led.scale, later.scale));
        assert!(close(led.scale, 1.0));
    }

    #[test]
    fn test_beam_progress_wraps() {
        let period = Duration::from_secs(20);
        assert!(close(beam_progress(Duration::from_secs(5), period), 0.25));
        assert!(close(beam_progress(Duration::from_secs(25), period), 0.25));
        assert_eq!(beam_progress(Duration::from_secs(5), Duration::ZERO), 1.0);
    }
}
