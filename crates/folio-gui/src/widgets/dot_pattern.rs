//! Dotted page background.

use iced::mouse;
use iced::widget::canvas::{self, Path};
use iced::{Color, Point, Rectangle, Renderer, Theme};

const DARK_SPACING: f32 = 20.0;
const DARK_OPACITY: f32 = 0.3;
const LIGHT_SPACING: f32 = 16.0;
const LIGHT_OPACITY: f32 = 0.2;
const DOT_RADIUS: f32 = 1.0;

/// Dot grid drawn behind the page.
///
/// Dark mode uses a flat 20px grid; light mode uses a denser grid that fades
/// out radially from the centre. The cache is owned by the app and cleared
/// when the theme flips; a resize redraws it on its own.
pub struct DotPattern<'a> {
    pub cache: &'a canvas::Cache,
    pub dark: bool,
    pub color: Color,
}

/// Opacity of a light-mode dot at `(x, y)` under an elliptical radial mask.
fn radial_mask(x: f32, y: f32, width: f32, height: f32) -> f32 {
    let dx = (x - width / 2.0) / (width / 2.0).max(1.0);
    let dy = (y - height / 2.0) / (height / 2.0).max(1.0);
    (1.0 - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0)
}

impl<Message> canvas::Program<Message> for DotPattern<'_> {
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
            let (spacing, opacity) = if self.dark {
                (DARK_SPACING, DARK_OPACITY)
            } else {
                (LIGHT_SPACING, LIGHT_OPACITY)
            };
            let (width, height) = (frame.width(), frame.height());

            let mut y = 2.0;
            while y < height {
                let mut x = 2.0;
                while x < width {
                    let alpha = if self.dark {
                        opacity
                    } else {
                        opacity * radial_mask(x, y, width, height)
                    };
                    if alpha > 0.0 {
                        frame.fill(
                            &Path::circle(Point::new(x, y), DOT_RADIUS),
                            Color { a: alpha, ..self.color },
                        );
                    }
                    x += spacing;
                }
                y += spacing;
            }
        });
        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radial_mask_peaks_at_centre() {
        assert!((radial_mask(50.0, 50.0, 100.0, 100.0) - 1.0).abs() < 1e-6);
        assert_eq!(radial_mask(0.0, 0.0, 100.0, 100.0), 0.0);
    }
}
