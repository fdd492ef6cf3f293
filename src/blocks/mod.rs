//! Block implementations.
//!
//! Leaves first, then the container and decorators:
//! - [`Text`] - a single string in one font
//! - [`TextRow`] - mixed-font strings on one shared baseline
//! - [`Padding`] - fixed-size spacer, draws nothing
//! - [`HorizontalLine`] - full-width rule with padding
//! - [`Expand`] - marks its subtree as main-axis-growable
//! - [`Panel`] - the flex container and distribution algorithm
//! - [`DebugOverlay`] - diagnostic border/label around any block

mod debug;
mod expand;
mod line;
mod padding;
mod panel;
mod text;
mod text_row;

pub use debug::DebugOverlay;
pub use expand::Expand;
pub use line::HorizontalLine;
pub use padding::Padding;
pub use panel::Panel;
pub use text::{Text, TextDesc};
pub use text_row::TextRow;
