//! Padding leaf - reserves space, draws nothing.

use crate::block::Block;
use crate::surface::Surface;
use crate::types::{Dimensions, Rect};

/// A fixed-size spacer.
pub struct Padding {
    width: i32,
    height: i32,
}

impl Padding {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Block for Padding {
    fn measure(&mut self, _surface: &dyn Surface) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    fn render(&mut self, _surface: &mut dyn Surface, _rect: Rect) {}
}
