//! Host drawing surface capability.
//!
//! The engine never assumes a concrete drawing backend. Every render call
//! receives an opaque [`Surface`] reference supplying the four primitive
//! operations the blocks need: text metrics, text drawing, filled and
//! stroked rectangles. Hosts implement this over whatever display driver
//! they own; tests use [`crate::testing::MonoSurface`].

use crate::types::Color;

// =============================================================================
// Font handle
// =============================================================================

/// Opaque handle to a host-managed font resource.
///
/// The engine never owns font data; it only passes the handle back to the
/// surface for metrics and drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontId(pub u32);

// =============================================================================
// Text metrics
// =============================================================================

/// Metrics for a string in a given font, as reported by the host.
///
/// `baseline` is the distance from the glyph-box top to the baseline
/// (the ascent); `height` is the full glyph-box height, so descent is
/// `height - baseline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMetrics {
    pub width: i32,
    pub x_offset: i32,
    pub baseline: i32,
    pub height: i32,
}

// =============================================================================
// Text anchor
// =============================================================================

/// Where the (x, y) of a draw_text call sits relative to the glyphs.
///
/// `TopLeft` is the plain-text mode (blocks pre-compute their own centering);
/// `BaselineLeft` is used by [`crate::blocks::TextRow`] to align mixed fonts
/// on one shared baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    BaselineLeft,
}

// =============================================================================
// Surface trait
// =============================================================================

/// The injected drawing capability.
///
/// Coordinates are absolute pixels on the host display. Out-of-bounds or
/// overlapping draws are the host's concern; the engine passes negative or
/// oversized geometry through unmodified when content overflows.
pub trait Surface {
    /// Measure a string in the given font.
    fn text_metrics(&self, font: FontId, text: &str) -> TextMetrics;

    /// Draw a string with its anchor at (x, y).
    fn draw_text(&mut self, x: i32, y: i32, font: FontId, text: &str, anchor: TextAnchor);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Draw a 1px rectangle outline.
    fn stroke_rect(&mut self, x: i32, y: i32, width: i32, height: i32);
}
