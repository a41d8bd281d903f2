//! Animated stroke that traces a bento card's outline.

use iced::mouse;
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use crate::style;

#[derive(Debug, Clone, Copy)]
pub struct BorderBeam {
    /// Covered fraction of the outline, 0..=1.
    pub progress: f32,
    pub from: Color,
    pub to: Color,
}

/// Vertices of the outline walked clockwise from the top-left corner,
/// cut off after `length` pixels.
pub fn outline_vertices(width: f32, height: f32, length: f32) -> Vec<(f32, f32)> {
    let corners = [(width, 0.0), (width, height), (0.0, height), (0.0, 0.0)];
    let mut points = vec![(0.0, 0.0)];
    let mut remaining = length.max(0.0);
    let mut at = (0.0_f32, 0.0_f32);

    for corner in corners {
        let segment = (corner.0 - at.0).abs() + (corner.1 - at.1).abs();
        if remaining >= segment {
            points.push(corner);
            remaining -= segment;
            at = corner;
        } else {
            let t = if segment > 0.0 { remaining / segment } else { 0.0 };
            points.push((at.0 + (corner.0 - at.0) * t, at.1 + (corner.1 - at.1) * t));
            break;
        }
    }
    points
}

fn mix(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}

impl<Message> canvas::Program<Message> for BorderBeam {
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
        let inset = style::BEAM_WIDTH / 2.0;
        let width = (bounds.width - style::BEAM_WIDTH).max(0.0);
        let height = (bounds.height - style::BEAM_WIDTH).max(0.0);
        let perimeter = 2.0 * (width + height);
        let vertices = outline_vertices(width, height, perimeter * self.progress.clamp(0.0, 1.0));

        if vertices.len() > 1 {
            let path = Path::new(|builder| {
                let (x, y) = vertices[0];
                builder.move_to(Point::new(x + inset, y + inset));
                for &(x, y) in &vertices[1..] {
                    builder.line_to(Point::new(x + inset, y + inset));
                }
            });
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(style::BEAM_WIDTH)
                    .with_color(mix(self.from, self.to, self.progress)),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_stops_mid_edge() {
        let points = outline_vertices(100.0, 50.0, 130.0);
        assert_eq!(points, vec![(0.0, 0.0), (100.0, 0.0), (100.0, 30.0)]);
    }

    #[test]
    fn test_full_outline_returns_to_origin() {
        let points = outline_vertices(100.0, 50.0, 300.0);
        assert_eq!(points.len(), 5);
        assert_eq!(points.last(), Some(&(0.0, 0.0)));
    }

    #[test]
    fn test_zero_length_is_a_single_point() {
        let points = outline_vertices(100.0, 50.0, 0.0);
        assert_eq!(points, vec![(0.0, 0.0), (0.0, 0.0)]);
    }
}
