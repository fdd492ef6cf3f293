//! Debug decorator - diagnostic border and geometry label.

use crate::block::Block;
use crate::surface::{FontId, Surface, TextAnchor};
use crate::types::{Color, Dimensions, Rect};

/// Wraps any block and outlines the exact rectangle it was granted.
///
/// Forwards measure, render and can_expand unchanged, so wrapping a block
/// never changes the layout around it. After the child renders, strokes the
/// allocated rect; with a diagnostic font configured, additionally blanks a
/// small corner patch and prints the rect's origin and size into it.
pub struct DebugOverlay {
    font: Option<FontId>,
    inner: Box<dyn Block>,
}

impl DebugOverlay {
    /// Border only.
    pub fn new(inner: Box<dyn Block>) -> Self {
        Self { font: None, inner }
    }

    /// Border plus origin/size label in the given font.
    pub fn labeled(font: FontId, inner: Box<dyn Block>) -> Self {
        Self {
            font: Some(font),
            inner,
        }
    }
}

impl Block for DebugOverlay {
    fn measure(&mut self, surface: &dyn Surface) -> Dimensions {
        self.inner.measure(surface)
    }

    fn render(&mut self, surface: &mut dyn Surface, rect: Rect) {
        self.inner.render(surface, rect);

        surface.stroke_rect(rect.x, rect.y, rect.width, rect.height);

        if let Some(font) = self.font {
            surface.fill_rect(rect.x + 2, rect.y + 2, 50, 30, Color::Off);
            surface.draw_text(
                rect.x + 2,
                rect.y + 2,
                font,
                &format!("{}:{}", rect.x, rect.y),
                TextAnchor::TopLeft,
            );
            surface.draw_text(
                rect.x + 2,
                rect.y + 20,
                font,
                &format!("{}x{}", rect.width, rect.height),
                TextAnchor::TopLeft,
            );
        }

        tracing::debug!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "debug overlay rendered"
        );
    }

    fn can_expand(&self) -> bool {
        self.inner.can_expand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{Expand, Padding};
    use crate::testing::{DrawCall, FontSpec, MonoSurface};

    #[test]
    fn test_outline_follows_child_render() {
        let mut surface = MonoSurface::new();
        let mut block = DebugOverlay::new(Box::new(Padding::new(10, 10)));

        block.measure(&surface);
        block.render(&mut surface, Rect::new(5, 6, 20, 10));

        assert_eq!(
            surface.calls(),
            &[DrawCall::StrokeRect {
                x: 5,
                y: 6,
                width: 20,
                height: 10,
            }]
        );
    }

    #[test]
    fn test_labeled_blanks_corner_and_prints_geometry() {
        let mut surface = MonoSurface::new();
        let font = surface.add_font(FontSpec::new(4, 6, 2));
        let mut block = DebugOverlay::labeled(font, Box::new(Padding::new(10, 10)));

        block.measure(&surface);
        block.render(&mut surface, Rect::new(5, 6, 20, 10));

        let calls = surface.calls();
        assert_eq!(
            calls[1],
            DrawCall::FillRect {
                x: 7,
                y: 8,
                width: 50,
                height: 30,
                color: Color::Off,
            }
        );
        assert_eq!(
            calls[2],
            DrawCall::Text {
                x: 7,
                y: 8,
                font,
                text: "5:6".to_string(),
                anchor: TextAnchor::TopLeft,
            }
        );
        assert_eq!(
            calls[3],
            DrawCall::Text {
                x: 7,
                y: 26,
                font,
                text: "20x10".to_string(),
                anchor: TextAnchor::TopLeft,
            }
        );
    }

    #[test]
    fn test_can_expand_forwards() {
        let plain = DebugOverlay::new(Box::new(Padding::new(1, 1)));
        assert!(!plain.can_expand());

        let growable = DebugOverlay::new(Box::new(Expand::new(Box::new(Padding::new(1, 1)))));
        assert!(growable.can_expand());
    }
}
