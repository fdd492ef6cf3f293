//! # flexpanel
//!
//! Two-pass flex-style layout engine for small pixel displays.
//!
//! A tree of [`Block`]s is measured bottom-up (every block reports its
//! intrinsic [`Dimensions`]) and then rendered top-down into an externally
//! granted [`Rect`], with panels distributing leftover space through
//! alignment, spacing and expand rules - a minimal flexbox.
//!
//! ## Architecture
//!
//! ```text
//! measure(): depth-first post-order, children before parents
//! render():  depth-first pre-order, parent computes child rects
//! ```
//!
//! The host display is injected as a [`Surface`] capability at the render
//! boundary; the engine never assumes a concrete drawing backend. Layout is
//! single-threaded and synchronous - one measure pass then one render pass
//! per display refresh tick.
//!
//! ## Example
//!
//! ```
//! use flexpanel::builder::*;
//! use flexpanel::testing::{FontSpec, MonoSurface};
//! use flexpanel::{Block, Rect};
//!
//! let mut surface = MonoSurface::new();
//! let big = surface.add_font(FontSpec::new(8, 14, 4));
//! let small = surface.add_font(FontSpec::new(5, 8, 2));
//!
//! let mut root = column(vec![
//!     Box::new(text_row(vec![text(big, "12"), text(small, ":30")])),
//!     Box::new(hline(1, 2, 2)),
//!     Box::new(expand(Box::new(text(big, "21C")))),
//! ]);
//!
//! root.measure(&surface);
//! root.render(&mut surface, Rect::new(0, 0, 64, 48));
//! ```
//!
//! ## Modules
//!
//! - [`types`] - value types ([`Dimensions`], [`Rect`], [`Align`], ...)
//! - [`surface`] - the host drawing capability
//! - [`block`] - the node contract {measure, render, can_expand}
//! - [`blocks`] - leaves, the panel container, decorators
//! - [`builder`] - convenience constructors for assembling trees
//! - [`testing`] - headless recording surface

pub mod block;
pub mod blocks;
pub mod builder;
pub mod surface;
pub mod testing;
pub mod types;

// Re-export commonly used items
pub use block::Block;
pub use blocks::{DebugOverlay, Expand, HorizontalLine, Padding, Panel, Text, TextDesc, TextRow};
pub use surface::{FontId, Surface, TextAnchor, TextMetrics};
pub use types::{Align, Color, CrossAlign, Dimensions, MainAlign, Orientation, Rect};
