//! Rotating golden-ratio spiral shown in the bento grid.

use iced::mouse;
use iced::widget::canvas::{self, Path};
use iced::{Color, Point, Rectangle, Renderer, Theme};

pub const SPIRAL_POINTS: usize = 500;
/// Rotation added on every animation frame, in radians.
pub const SPIRAL_SPIN_PER_FRAME: f32 = 0.002;
pub const SPIRAL_OPACITY: f32 = 0.55;

/// Distance from the camera to the spiral's plane.
const CAMERA_DISTANCE: f32 = 5.0;
/// Half of the 75° vertical field of view.
const HALF_FOV: f32 = 37.5 * std::f32::consts::PI / 180.0;

/// Points of a phyllotaxis spiral: `(x, y, z)` with the radius growing by
/// the golden ratio and a slight rise in z.
pub fn spiral_points(count: usize) -> Vec<[f32; 3]> {
    let golden = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let turn_fraction = 1.0 - 1.0 / golden;
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let angle = std::f32::consts::TAU * turn_fraction * i as f32;
            let radius = 1.5 * golden.powf(t / 2.0);
            [radius * angle.cos(), radius * angle.sin(), 0.5 * t]
        })
        .collect()
}

/// Spiral state owned by the app.
///
/// The point set is computed once. The drawn geometry is cached and thrown
/// away whenever the rotation or the color changes.
#[derive(Debug)]
pub struct Spiral {
    points: Vec<[f32; 3]>,
    rotation: f32,
    color: Color,
    cache: canvas::Cache,
}

impl Spiral {
    pub fn new(color: Color) -> Self {
        Self {
            points: spiral_points(SPIRAL_POINTS),
            rotation: 0.0,
            color,
            cache: canvas::Cache::default(),
        }
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Advance one animation frame.
    pub fn spin(&mut self) {
        self.rotation = (self.rotation + SPIRAL_SPIN_PER_FRAME) % std::f32::consts::TAU;
        self.cache.clear();
    }

    /// Recolor after a theme change.
    pub fn set_color(&mut self, color: Color) {
        if self.color != color {
            self.color = color;
            self.cache.clear();
        }
    }
}

impl<Message> canvas::Program<Message> for Spiral {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            let half = frame.width().min(frame.height()) / 2.0;
            let focal = 1.0 / HALF_FOV.tan();
            let (sin, cos) = self.rotation.sin_cos();
            let color = Color {
                a: SPIRAL_OPACITY,
                ..self.color
            };

            for &[x, y, z] in &self.points {
                let rx = x * cos - y * sin;
                let ry = x * sin + y * cos;
                let depth = CAMERA_DISTANCE - z;
                let scale = focal / depth;
                let screen = Point::new(center.x + rx * scale * half, center.y - ry * scale * half);
                frame.fill(&Path::circle(screen, 1.5 + z), color);
            }
        });
        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spiral_has_500_points_inside_growth_bounds() {
        let points = spiral_points(SPIRAL_POINTS);
        assert_eq!(points.len(), 500);
        let golden = (1.0 + 5.0_f32.sqrt()) / 2.0;
        for [x, y, z] in points {
            let r = (x * x + y * y).sqrt();
            assert!(r >= 1.5 - 1e-4 && r <= 1.5 * golden.sqrt() + 1e-4);
            assert!((0.0..0.5).contains(&z));
        }
    }

    #[test]
    fn test_spin_wraps() {
        let mut spiral = Spiral::new(Color::BLACK);
        for _ in 0..10_000 {
            spiral.spin();
        }
        assert!(spiral.rotation() < std::f32::consts::TAU);
    }
}
