//! Convenience constructors for assembling block trees.
//!
//! An ergonomics layer over the core: the engine itself only needs a tree of
//! already-constructed blocks. These helpers mirror the shapes trees are
//! usually built in - columns and rows of boxed blocks, formatted text,
//! spacers.
//!
//! # Example
//!
//! ```
//! use flexpanel::builder::*;
//! use flexpanel::surface::FontId;
//!
//! let font = FontId(0);
//! let tree = column(vec![
//!     Box::new(text_row(vec![text(font, "12"), text(font, ":30")])),
//!     Box::new(hline(1, 2, 2)),
//!     Box::new(expand(Box::new(text(font, "21C")))),
//! ]);
//! ```

use std::fmt;
use std::fmt::Write;

use crate::block::Block;
use crate::blocks::{DebugOverlay, Expand, HorizontalLine, Padding, Panel, Text, TextDesc, TextRow};
use crate::surface::FontId;
use crate::types::{Align, Orientation};

/// Capacity of the formatted-text buffer, in bytes. Formatting past it
/// truncates silently.
pub const TEXT_CAPACITY: usize = 255;

// =============================================================================
// Align lint
// =============================================================================

const MAIN_GROUP: Align = Align::START.union(Align::CENTER).union(Align::END);
const CROSS_GROUP: Align = Align::MIDDLE.union(Align::BOTTOM).union(Align::STRETCH);

/// Warn when an Align value sets several bits of the same group.
///
/// The core resolves such values by a fixed priority, so this is never an
/// error - but it almost always means the caller meant something else.
fn lint_align(align: Align) {
    if (align & MAIN_GROUP).bits().count_ones() > 1 {
        tracing::warn!(?align, "multiple main-axis alignment bits set; first-match priority applies");
    }
    if (align & CROSS_GROUP).bits().count_ones() > 1 {
        tracing::warn!(?align, "multiple cross-axis alignment bits set; first-match priority applies");
    }
}

// =============================================================================
// Text
// =============================================================================

/// A text leaf.
pub fn text(font: FontId, content: impl Into<String>) -> Text {
    Text::new(TextDesc::new(font, content))
}

/// A text leaf from format arguments, truncated to [`TEXT_CAPACITY`] bytes.
///
/// ```
/// use flexpanel::builder::text_fmt;
/// use flexpanel::surface::FontId;
///
/// let t = text_fmt(FontId(0), format_args!("{}:{:02}", 12, 5));
/// assert_eq!(t.desc().text, "12:05");
/// ```
pub fn text_fmt(font: FontId, args: fmt::Arguments<'_>) -> Text {
    let mut buffer = CappedBuffer::new(TEXT_CAPACITY);
    // CappedBuffer never reports an error; overflow is silently dropped.
    let _ = buffer.write_fmt(args);
    Text::new(TextDesc::new(font, buffer.into_string()))
}

/// A shared-baseline row of text leaves.
pub fn text_row(texts: Vec<Text>) -> TextRow {
    TextRow::new(texts)
}

// =============================================================================
// Panels
// =============================================================================

/// Vertical panel with the default policy (`SPACE_BETWEEN | STRETCH`).
pub fn column(children: Vec<Box<dyn Block>>) -> Panel {
    column_aligned(Align::SPACE_BETWEEN | Align::STRETCH, children)
}

/// Horizontal panel with the default policy (`SPACE_BETWEEN | STRETCH`).
pub fn row(children: Vec<Box<dyn Block>>) -> Panel {
    row_aligned(Align::SPACE_BETWEEN | Align::STRETCH, children)
}

/// Vertical panel with an explicit alignment policy.
pub fn column_aligned(align: Align, children: Vec<Box<dyn Block>>) -> Panel {
    lint_align(align);
    Panel::new(Orientation::Vertical, align, children)
}

/// Horizontal panel with an explicit alignment policy.
pub fn row_aligned(align: Align, children: Vec<Box<dyn Block>>) -> Panel {
    lint_align(align);
    Panel::new(Orientation::Horizontal, align, children)
}

// =============================================================================
// Spacers and rules
// =============================================================================

/// Horizontal spacer of the given width.
pub fn hspace(width: i32) -> Padding {
    Padding::new(width, 0)
}

/// Vertical spacer of the given height.
pub fn vspace(height: i32) -> Padding {
    Padding::new(0, height)
}

/// Horizontal rule.
pub fn hline(thickness: i32, h_padding: i32, v_padding: i32) -> HorizontalLine {
    HorizontalLine::new(thickness, h_padding, v_padding)
}

// =============================================================================
// Decorators
// =============================================================================

/// Mark a subtree as willing to absorb leftover main-axis space.
pub fn expand(inner: Box<dyn Block>) -> Expand {
    Expand::new(inner)
}

/// Outline a block's allocated rectangle.
pub fn debug(inner: Box<dyn Block>) -> DebugOverlay {
    DebugOverlay::new(inner)
}

/// Outline a block's allocated rectangle and label it with its geometry.
pub fn debug_labeled(font: FontId, inner: Box<dyn Block>) -> DebugOverlay {
    DebugOverlay::labeled(font, inner)
}

// =============================================================================
// Capped formatting buffer
// =============================================================================

/// String buffer that silently drops writes past its capacity, always at a
/// char boundary.
struct CappedBuffer {
    buf: String,
    capacity: usize,
}

impl CappedBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            buf: String::new(),
            capacity,
        }
    }

    fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for CappedBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.buf.len() + ch.len_utf8() > self.capacity {
                break;
            }
            self.buf.push(ch);
        }
        Ok(())
    }
}
