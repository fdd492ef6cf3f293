//! Text leaf - a single string in one font.

use crate::block::Block;
use crate::surface::{FontId, Surface, TextAnchor};
use crate::types::{Dimensions, Rect};

/// A font handle plus the owned string it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDesc {
    pub font: FontId,
    pub text: String,
}

impl TextDesc {
    pub fn new(font: FontId, text: impl Into<String>) -> Self {
        Self {
            font,
            text: text.into(),
        }
    }
}

/// A single run of text.
///
/// Measures to the host font metrics for its string. When granted more
/// space than it measured (a stretching parent), the surplus is absorbed
/// as symmetric margin: the glyphs are centered at their measured size,
/// never re-flowed.
pub struct Text {
    desc: TextDesc,
    measured: Dimensions,
}

impl Text {
    pub fn new(desc: TextDesc) -> Self {
        Self {
            desc,
            measured: Dimensions::ZERO,
        }
    }

    /// The font/string pair. [`TextRow`](crate::blocks::TextRow) reads this
    /// to query metrics for its shared-baseline accounting.
    pub fn desc(&self) -> &TextDesc {
        &self.desc
    }
}

impl Block for Text {
    fn measure(&mut self, surface: &dyn Surface) -> Dimensions {
        let m = surface.text_metrics(self.desc.font, &self.desc.text);
        self.measured = Dimensions::new(m.width, m.height);
        self.measured
    }

    fn render(&mut self, surface: &mut dyn Surface, rect: Rect) {
        // Center at measured size; extra space becomes margin.
        let x = rect.x + (rect.width - self.measured.width) / 2;
        let y = rect.y + (rect.height - self.measured.height) / 2;

        surface.draw_text(x, y, self.desc.font, &self.desc.text, TextAnchor::TopLeft);
    }
}
