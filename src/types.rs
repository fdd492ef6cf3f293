//! Core types for flexpanel.
//!
//! Value types that flow through the two layout passes: [`Dimensions`] out of
//! the measure pass, [`Rect`] into the render pass, [`Align`] as the panel's
//! distribution policy.

// =============================================================================
// Dimensions - intrinsic size
// =============================================================================

/// Intrinsic (unconstrained) size of a block, in pixels.
///
/// Produced by the measure pass and consumed by the parent panel during
/// distribution. Recomputed and overwritten on every measure call; never
/// mutated outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

// =============================================================================
// Rect - allocated region
// =============================================================================

/// A region granted to a block's render call.
///
/// Lives only on the render call stack. Signed throughout: when content
/// overflows its allocation, offsets go negative and are applied as-is
/// rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

// =============================================================================
// Orientation - panel stacking direction
// =============================================================================

/// Stacking direction of a [`Panel`](crate::blocks::Panel).
///
/// The stacking direction is the *main axis*; the perpendicular one is the
/// *cross axis*. Vertical panels stack along Y, horizontal along X.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

// =============================================================================
// Color - small-display pixel state
// =============================================================================

/// Pixel state on a monochrome display.
///
/// `Off` doubles as the background constant used to blank a region before
/// overlaying diagnostic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    On,
    Off,
}

// =============================================================================
// Align (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Panel alignment policy as a bitfield.
    ///
    /// Combines two independent concerns:
    /// - main axis: `START`, `CENTER`, `END` (`SPACE_BETWEEN` is the empty
    ///   default)
    /// - cross axis: `MIDDLE`, `BOTTOM`, `STRETCH` (`TOP` is the empty
    ///   default; `LEFT`/`RIGHT` alias `TOP`/`BOTTOM` for horizontal reading)
    ///
    /// Combine with bitwise OR: `Align::SPACE_BETWEEN | Align::STRETCH`.
    ///
    /// Nothing stops a caller from setting several bits of the same group;
    /// resolution uses a fixed first-match priority (see [`Align::main_axis`]
    /// and [`Align::cross_axis`]). The builder layer warns on such values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Align: u8 {
        // Main axis (vertical for vertical panels, horizontal for horizontal)
        const SPACE_BETWEEN = 0;
        const START = 1 << 0;
        const CENTER = 1 << 1;
        const END = 1 << 2;

        // Cross axis (perpendicular to the main axis)
        const TOP = 0;
        const MIDDLE = 1 << 3;
        const BOTTOM = 1 << 4;
        const STRETCH = 1 << 5;

        // Aliases for horizontal cross-axis reading
        const LEFT = 0;
        const RIGHT = 1 << 4;
    }
}

/// Resolved main-axis alignment, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAlign {
    Start,
    Center,
    End,
    SpaceBetween,
}

/// Resolved cross-axis alignment, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossAlign {
    Stretch,
    End,
    Middle,
    Start,
}

impl Align {
    /// Resolve the main-axis group with first-match priority
    /// Start > Center > End > SpaceBetween.
    pub fn main_axis(self) -> MainAlign {
        if self.contains(Align::START) {
            MainAlign::Start
        } else if self.contains(Align::CENTER) {
            MainAlign::Center
        } else if self.contains(Align::END) {
            MainAlign::End
        } else {
            MainAlign::SpaceBetween
        }
    }

    /// Resolve the cross-axis group with first-match priority
    /// Stretch > Bottom/Right > Middle > Top/Left.
    pub fn cross_axis(self) -> CrossAlign {
        if self.contains(Align::STRETCH) {
            CrossAlign::Stretch
        } else if self.contains(Align::BOTTOM) {
            CrossAlign::End
        } else if self.contains(Align::MIDDLE) {
            CrossAlign::Middle
        } else {
            CrossAlign::Start
        }
    }
}
