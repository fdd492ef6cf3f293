//! Headless surface for tests and examples.
//!
//! [`MonoSurface`] implements [`Surface`] without a display: fonts are
//! registered as fixed per-cell metrics, text width is the Unicode display
//! width of the string times the font's advance, and every draw call is
//! recorded in order so tests can assert exact geometry.

use unicode_width::UnicodeWidthStr;

use crate::surface::{FontId, Surface, TextAnchor, TextMetrics};
use crate::types::Color;

/// Fixed metrics of a registered monospace font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    /// Horizontal advance per cell, in pixels.
    pub advance: i32,
    /// Pixels above the baseline.
    pub ascent: i32,
    /// Pixels below the baseline.
    pub descent: i32,
}

impl FontSpec {
    pub const fn new(advance: i32, ascent: i32, descent: i32) -> Self {
        Self {
            advance,
            ascent,
            descent,
        }
    }
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Text {
        x: i32,
        y: i32,
        font: FontId,
        text: String,
        anchor: TextAnchor,
    },
    FillRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
    StrokeRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Recording surface with monospace font metrics.
#[derive(Debug, Default)]
pub struct MonoSurface {
    fonts: Vec<FontSpec>,
    calls: Vec<DrawCall>,
}

impl MonoSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font and get its handle.
    pub fn add_font(&mut self, spec: FontSpec) -> FontId {
        self.fonts.push(spec);
        FontId(self.fonts.len() as u32 - 1)
    }

    /// All draw calls recorded so far, in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drop the recorded calls, keeping registered fonts.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn font(&self, font: FontId) -> FontSpec {
        // Unknown handles fall back to a 1x1 font rather than faulting.
        self.fonts
            .get(font.0 as usize)
            .copied()
            .unwrap_or(FontSpec::new(1, 1, 0))
    }
}

impl Surface for MonoSurface {
    fn text_metrics(&self, font: FontId, text: &str) -> TextMetrics {
        let spec = self.font(font);
        let cells = text.width() as i32;

        TextMetrics {
            width: cells * spec.advance,
            x_offset: 0,
            baseline: spec.ascent,
            height: spec.ascent + spec.descent,
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, font: FontId, text: &str, anchor: TextAnchor) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            font,
            text: text.to_string(),
            anchor,
        });
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.calls.push(DrawCall::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn stroke_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(DrawCall::StrokeRect {
            x,
            y,
            width,
            height,
        });
    }
}
