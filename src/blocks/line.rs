//! HorizontalLine leaf - a full-width rule.

use crate::block::Block;
use crate::surface::Surface;
use crate::types::{Color, Dimensions, Rect};

/// A horizontal separator line.
///
/// Measures only its intrinsic footprint (padding plus thickness). Render
/// ignores the measured width and spans the entire allocated width minus the
/// horizontal padding on each side, so the rule always fills whatever a
/// horizontal flow context grants it.
pub struct HorizontalLine {
    thickness: i32,
    h_padding: i32,
    v_padding: i32,
}

impl HorizontalLine {
    pub fn new(thickness: i32, h_padding: i32, v_padding: i32) -> Self {
        Self {
            thickness,
            h_padding,
            v_padding,
        }
    }
}

impl Block for HorizontalLine {
    fn measure(&mut self, _surface: &dyn Surface) -> Dimensions {
        Dimensions::new(self.h_padding * 2, self.thickness + self.v_padding * 2)
    }

    fn render(&mut self, surface: &mut dyn Surface, rect: Rect) {
        let line_len = rect.width - self.h_padding * 2;

        surface.fill_rect(
            rect.x + self.h_padding,
            rect.y + self.v_padding,
            line_len,
            self.thickness,
            Color::On,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, MonoSurface};

    #[test]
    fn test_measure_is_intrinsic_footprint() {
        let surface = MonoSurface::new();
        let mut line = HorizontalLine::new(2, 4, 3);
        assert_eq!(line.measure(&surface), Dimensions::new(8, 8));
    }

    #[test]
    fn test_render_spans_allocated_width() {
        let mut surface = MonoSurface::new();
        let mut line = HorizontalLine::new(2, 4, 3);
        line.measure(&surface);
        line.render(&mut surface, Rect::new(10, 20, 100, 8));

        assert_eq!(
            surface.calls(),
            &[DrawCall::FillRect {
                x: 14,
                y: 23,
                width: 92,
                height: 2,
                color: Color::On,
            }]
        );
    }
}
