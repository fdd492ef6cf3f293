//! The block capability contract.
//!
//! Every node in a layout tree is a [`Block`]: it can report an intrinsic
//! size, draw itself into a granted rectangle, and declare whether it is
//! willing to absorb leftover main-axis space inside a panel.
//!
//! # Protocol
//!
//! Layout is two passes driven by the caller, typically once per display
//! refresh tick:
//!
//! 1. `measure()` on the root - recurses depth-first post-order, children
//!    before parents. Each block caches its result.
//! 2. `render()` on the root with the allocated rectangle - recurses
//!    depth-first pre-order, each parent computing its children's
//!    rectangles before descending.
//!
//! Render reads the dimensions cached by the latest measure, so every
//! render must be preceded by a measure in the same pass. That discipline
//! belongs to the caller; it is not checked at runtime.

use crate::surface::Surface;
use crate::types::{Dimensions, Rect};

/// A node in the layout tree.
///
/// Blocks form a single-owner tree (`Box<dyn Block>` children); there is no
/// sharing and no back-references.
pub trait Block {
    /// Compute and cache this block's intrinsic size.
    ///
    /// Takes the surface because text metrics live on the host.
    fn measure(&mut self, surface: &dyn Surface) -> Dimensions;

    /// Draw into the granted rectangle.
    ///
    /// The rectangle may be larger than the measured size (growth, stretch,
    /// alignment surplus) or smaller (overflow); blocks degrade gracefully
    /// in both directions.
    fn render(&mut self, surface: &mut dyn Surface, rect: Rect);

    /// Whether this block wants leftover main-axis space from an enclosing
    /// panel. Only [`crate::blocks::Expand`] answers true.
    fn can_expand(&self) -> bool {
        false
    }
}
