//! Expanding rings behind the contact panel.

use std::time::Duration;

use folio_core::motion::{ripple_frame, RIPPLE_LEADS};
use iced::mouse;
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Color, Rectangle, Renderer, Theme};

use crate::style;

/// One draw of the three staggered ripples.
///
/// Rebuilt every view; the rings change on every frame so nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct Ripples {
    pub elapsed: Duration,
    pub color: Color,
    /// Full ring diameter at scale 1.
    pub diameter: f32,
}

impl Ripples {
    pub fn new(elapsed: Duration, color: Color, viewport_width: f32) -> Self {
        Self {
            elapsed,
            color,
            diameter: viewport_width * style::RIPPLE_DIAMETER_VW / 100.0,
        }
    }
}

impl<Message> canvas::Program<Message> for Ripples {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();

        for lead in RIPPLE_LEADS {
            let ring = ripple_frame(self.elapsed, lead);
            let radius = ring.scale * self.diameter / 2.0;
            if radius <= 0.0 || ring.opacity <= 0.0 {
                continue;
            }
            let color = Color {
                a: self.color.a * ring.opacity,
                ..self.color
            };
            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default().with_width(2.0).with_color(color),
            );
        }

        vec![frame.into_geometry()]
    }
}
