//! TextRow - mixed-font text on one shared baseline.

use crate::block::Block;
use crate::surface::{Surface, TextAnchor};
use crate::types::{Dimensions, Rect};

use super::text::Text;

/// A flat sequence of [`Text`] leaves laid out on one baseline.
///
/// A plain horizontal panel of texts would top-align the glyph boxes, which
/// looks wrong when fonts of different size share a line. TextRow instead
/// queries each child's metrics itself and accounts ascent and descent
/// separately:
///
/// - width = sum of advance widths
/// - height = max(ascent) + max(descent)
/// - baseline anchor = max(ascent)
///
/// Render centers the measured box inside the granted rect (same policy as
/// [`Text`]), then walks a left-to-right cursor drawing every child at the
/// shared baseline with the baseline-left anchor.
pub struct TextRow {
    blocks: Vec<Text>,
    block_dims: Vec<Dimensions>,
    max_baseline: i32,
    measured: Dimensions,
}

impl TextRow {
    pub fn new(blocks: Vec<Text>) -> Self {
        let block_dims = vec![Dimensions::ZERO; blocks.len()];
        Self {
            blocks,
            block_dims,
            max_baseline: 0,
            measured: Dimensions::ZERO,
        }
    }
}

impl Block for TextRow {
    fn measure(&mut self, surface: &dyn Surface) -> Dimensions {
        let mut width = 0;
        let mut max_above = 0;
        let mut max_below = 0;
        let mut max_baseline = 0;

        for (block, dims) in self.blocks.iter().zip(self.block_dims.iter_mut()) {
            let desc = block.desc();
            let m = surface.text_metrics(desc.font, &desc.text);

            width += m.width;
            max_above = max_above.max(m.baseline);
            max_below = max_below.max(m.height - m.baseline);
            max_baseline = max_baseline.max(m.baseline);

            *dims = Dimensions::new(m.width, m.height);
        }

        self.max_baseline = max_baseline;
        self.measured = Dimensions::new(width, max_above + max_below);
        self.measured
    }

    fn render(&mut self, surface: &mut dyn Surface, rect: Rect) {
        // Center at measured size, then drop from the top edge to the
        // shared baseline.
        let mut x = rect.x + (rect.width - self.measured.width) / 2;
        let y = rect.y + (rect.height - self.measured.height) / 2 + self.max_baseline;

        for (block, dims) in self.blocks.iter().zip(self.block_dims.iter()) {
            let desc = block.desc();
            surface.draw_text(x, y, desc.font, &desc.text, TextAnchor::BaselineLeft);
            x += dims.width;
        }
    }
}
