//! Expand decorator - marks a subtree as main-axis-growable.

use crate::block::Block;
use crate::surface::Surface;
use crate::types::{Dimensions, Rect};

/// Transparent wrapper that answers `can_expand() == true`.
///
/// Forwards measure and render unchanged; its only job is to flag the
/// wrapped subtree as eligible for leftover main-axis space in an enclosing
/// [`Panel`](crate::blocks::Panel).
pub struct Expand {
    inner: Box<dyn Block>,
}

impl Expand {
    pub fn new(inner: Box<dyn Block>) -> Self {
        Self { inner }
    }
}

impl Block for Expand {
    fn measure(&mut self, surface: &dyn Surface) -> Dimensions {
        self.inner.measure(surface)
    }

    fn render(&mut self, surface: &mut dyn Surface, rect: Rect) {
        self.inner.render(surface, rect);
    }

    fn can_expand(&self) -> bool {
        true
    }
}
