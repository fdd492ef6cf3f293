//! Panel - the flex container and its distribution algorithm.
//!
//! # Algorithm
//!
//! Measure (bottom-up): main-axis size is the sum of the children's
//! main-axis sizes, cross-axis size is their max. Symmetric under axis swap.
//!
//! Render (top-down), given an allocated rect:
//!
//! 1. `leftover = allocated_main - measured_main` (unclamped, may be
//!    negative on overflow).
//! 2. If any child `can_expand()`, split the leftover between the
//!    expandable children (integer division, remainder dropped) and treat
//!    it as consumed: expand growth and alignment spacing are mutually
//!    exclusive, expand wins. A negative leftover shrinks them.
//! 3. Otherwise, positive leftover is distributed by the main-axis
//!    alignment (priority Start > Center > End > SpaceBetween) as a start
//!    offset and/or inter-item padding.
//! 4. Each child's cross-axis size and position come from the cross-axis
//!    alignment (priority Stretch > Bottom/Right > Middle > Top/Left).
//! 5. Children render in order at a running main-axis cursor.
//!
//! Overflow never faults: children simply receive overlapping or
//! out-of-bounds rectangles.

use crate::block::Block;
use crate::surface::Surface;
use crate::types::{Align, CrossAlign, Dimensions, MainAlign, Orientation, Rect};

/// Main-axis component of a (width, height) pair.
fn main_len(orientation: Orientation, width: i32, height: i32) -> i32 {
    match orientation {
        Orientation::Vertical => height,
        Orientation::Horizontal => width,
    }
}

/// Cross-axis component of a (width, height) pair.
fn cross_len(orientation: Orientation, width: i32, height: i32) -> i32 {
    match orientation {
        Orientation::Vertical => width,
        Orientation::Horizontal => height,
    }
}

/// A flex container stacking children along one axis.
pub struct Panel {
    orientation: Orientation,
    align: Align,
    blocks: Vec<Box<dyn Block>>,
    block_dims: Vec<Dimensions>,
    measured: Dimensions,
}

impl Panel {
    pub fn new(orientation: Orientation, align: Align, blocks: Vec<Box<dyn Block>>) -> Self {
        let block_dims = vec![Dimensions::ZERO; blocks.len()];
        Self {
            orientation,
            align,
            blocks,
            block_dims,
            measured: Dimensions::ZERO,
        }
    }
}

impl Block for Panel {
    fn measure(&mut self, surface: &dyn Surface) -> Dimensions {
        let mut width = 0;
        let mut height = 0;

        for (block, dims) in self.blocks.iter_mut().zip(self.block_dims.iter_mut()) {
            let dm = block.measure(surface);
            *dims = dm;

            match self.orientation {
                Orientation::Vertical => {
                    height += dm.height;
                    width = width.max(dm.width);
                }
                Orientation::Horizontal => {
                    width += dm.width;
                    height = height.max(dm.height);
                }
            }
        }

        self.measured = Dimensions::new(width, height);
        self.measured
    }

    fn render(&mut self, surface: &mut dyn Surface, rect: Rect) {
        let orientation = self.orientation;
        let align = self.align;

        let mut leftover = main_len(orientation, rect.width, rect.height)
            - main_len(orientation, self.measured.width, self.measured.height);

        // Work on a copy of the measured sizes so repeated renders after one
        // measure stay stable.
        let mut dims = self.block_dims.clone();

        // Step 1: expandable children absorb the leftover (even negative),
        // split evenly with the remainder dropped. Alignment spacing then
        // sees no leftover at all.
        let expandable = self.blocks.iter().filter(|b| b.can_expand()).count() as i32;
        let mut share_per_expandable = 0;
        if expandable > 0 {
            share_per_expandable = leftover / expandable;
            leftover = 0;
        }

        // Step 2: resolve main-axis alignment into a start offset and
        // inter-item padding. Nothing to distribute on overflow.
        let mut start_offset = 0;
        let mut flow_padding = 0;
        if leftover > 0 {
            match align.main_axis() {
                MainAlign::Start => {
                    // Leftover sits after the last child.
                }
                MainAlign::Center => {
                    start_offset = leftover / 2;
                }
                MainAlign::End => {
                    start_offset = leftover;
                }
                MainAlign::SpaceBetween => {
                    flow_padding = match self.blocks.len() {
                        0 => 0,
                        // A lone child gets half the leftover as trailing pad.
                        1 => leftover / 2,
                        n => leftover / (n as i32 - 1),
                    };
                }
            }
        }

        // Step 3: grow (or shrink) the expandable children along the main
        // axis.
        for (block, dm) in self.blocks.iter().zip(dims.iter_mut()) {
            if block.can_expand() {
                match orientation {
                    Orientation::Vertical => dm.height += share_per_expandable,
                    Orientation::Horizontal => dm.width += share_per_expandable,
                }
            }
        }

        // Step 4: walk the main-axis cursor, placing each child with its
        // cross-axis alignment applied.
        let mut cursor_x = rect.x;
        let mut cursor_y = rect.y;
        match orientation {
            Orientation::Vertical => cursor_y += start_offset,
            Orientation::Horizontal => cursor_x += start_offset,
        }

        let panel_cross = cross_len(orientation, rect.width, rect.height);

        for (block, dm) in self.blocks.iter_mut().zip(dims.iter()) {
            let mut x = cursor_x;
            let mut y = cursor_y;
            let mut w = dm.width;
            let mut h = dm.height;

            match align.cross_axis() {
                CrossAlign::Stretch => match orientation {
                    Orientation::Vertical => w = panel_cross,
                    Orientation::Horizontal => h = panel_cross,
                },
                CrossAlign::End => {
                    let offset = panel_cross - cross_len(orientation, w, h);
                    match orientation {
                        Orientation::Vertical => x += offset,
                        Orientation::Horizontal => y += offset,
                    }
                }
                CrossAlign::Middle => {
                    let offset = (panel_cross - cross_len(orientation, w, h)) / 2;
                    match orientation {
                        Orientation::Vertical => x += offset,
                        Orientation::Horizontal => y += offset,
                    }
                }
                CrossAlign::Start => {
                    // Already flush with the near edge.
                }
            }

            block.render(surface, Rect::new(x, y, w, h));

            let advance = main_len(orientation, w, h) + flow_padding;
            match orientation {
                Orientation::Vertical => cursor_y += advance,
                Orientation::Horizontal => cursor_x += advance,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::Expand;
    use crate::testing::MonoSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Fixed-size block that records every rect it is rendered with.
    struct Probe {
        size: Dimensions,
        rects: Rc<RefCell<Vec<Rect>>>,
    }

    impl Probe {
        fn new(width: i32, height: i32, rects: &Rc<RefCell<Vec<Rect>>>) -> Box<Self> {
            Box::new(Self {
                size: Dimensions::new(width, height),
                rects: Rc::clone(rects),
            })
        }
    }

    impl Block for Probe {
        fn measure(&mut self, _surface: &dyn Surface) -> Dimensions {
            self.size
        }

        fn render(&mut self, _surface: &mut dyn Surface, rect: Rect) {
            self.rects.borrow_mut().push(rect);
        }
    }

    fn rect_log() -> Rc<RefCell<Vec<Rect>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_measure_sums_main_and_maxes_cross_horizontal() {
        let surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::SPACE_BETWEEN,
            vec![
                Probe::new(10, 5, &log),
                Probe::new(20, 9, &log),
                Probe::new(5, 7, &log),
            ],
        );

        assert_eq!(panel.measure(&surface), Dimensions::new(35, 9));
    }

    #[test]
    fn test_measure_sums_main_and_maxes_cross_vertical() {
        let surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Vertical,
            Align::SPACE_BETWEEN,
            vec![
                Probe::new(10, 5, &log),
                Probe::new(20, 9, &log),
                Probe::new(5, 7, &log),
            ],
        );

        assert_eq!(panel.measure(&surface), Dimensions::new(20, 21));
    }

    #[test]
    fn test_measure_is_idempotent() {
        let surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::CENTER,
            vec![Probe::new(10, 5, &log), Probe::new(20, 9, &log)],
        );

        let first = panel.measure(&surface);
        let second = panel.measure(&surface);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_panel_measures_zero_and_renders_nothing() {
        let mut surface = MonoSurface::new();
        let mut panel = Panel::new(Orientation::Vertical, Align::SPACE_BETWEEN, Vec::new());

        assert_eq!(panel.measure(&surface), Dimensions::ZERO);
        panel.render(&mut surface, Rect::new(0, 0, 50, 50));
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_space_between_distributes_leftover_evenly() {
        let mut surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::SPACE_BETWEEN,
            vec![
                Probe::new(10, 5, &log),
                Probe::new(10, 5, &log),
                Probe::new(10, 5, &log),
            ],
        );

        panel.measure(&surface);
        panel.render(&mut surface, Rect::new(0, 0, 50, 5));

        // leftover 20, padding 20/(3-1) = 10.
        let xs: Vec<i32> = log.borrow().iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![0, 20, 40]);
    }

    #[test]
    fn test_space_between_single_child_halves_leftover_as_padding() {
        let mut surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::SPACE_BETWEEN,
            vec![Probe::new(10, 5, &log)],
        );

        panel.measure(&surface);
        // No division by (n - 1); the lone child stays at the origin.
        panel.render(&mut surface, Rect::new(0, 0, 50, 5));
        assert_eq!(log.borrow()[0], Rect::new(0, 0, 10, 5));
    }

    #[test]
    fn test_start_center_end_offsets() {
        for (align, expected_x) in [
            (Align::START, 0),
            (Align::CENTER, 10),
            (Align::END, 20),
        ] {
            let mut surface = MonoSurface::new();
            let log = rect_log();
            let mut panel = Panel::new(
                Orientation::Horizontal,
                align,
                vec![Probe::new(10, 5, &log), Probe::new(20, 5, &log)],
            );

            panel.measure(&surface);
            panel.render(&mut surface, Rect::new(0, 0, 50, 5));

            let xs: Vec<i32> = log.borrow().iter().map(|r| r.x).collect();
            assert_eq!(xs, vec![expected_x, expected_x + 10], "{align:?}");
        }
    }

    #[test]
    fn test_main_align_priority_start_beats_end() {
        let mut surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::START | Align::END,
            vec![Probe::new(10, 5, &log)],
        );

        panel.measure(&surface);
        panel.render(&mut surface, Rect::new(0, 0, 50, 5));

        // First-match priority: Start wins, child stays at the origin.
        assert_eq!(log.borrow()[0].x, 0);
    }

    #[test]
    fn test_single_expandable_absorbs_all_leftover() {
        let mut surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::SPACE_BETWEEN,
            vec![
                Probe::new(10, 5, &log),
                Box::new(Expand::new(Probe::new(10, 5, &log))),
                Probe::new(10, 5, &log),
            ],
        );

        panel.measure(&surface);
        panel.render(&mut surface, Rect::new(0, 0, 50, 5));

        // Expand wins over SpaceBetween: no inter-item padding at all.
        let rects = log.borrow();
        assert_eq!(rects[0], Rect::new(0, 0, 10, 5));
        assert_eq!(rects[1], Rect::new(10, 0, 30, 5));
        assert_eq!(rects[2], Rect::new(40, 0, 10, 5));
    }

    #[test]
    fn test_two_expandables_split_leftover_dropping_remainder() {
        let mut surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::SPACE_BETWEEN,
            vec![
                Box::new(Expand::new(Probe::new(10, 5, &log))),
                Box::new(Expand::new(Probe::new(10, 5, &log))),
            ],
        );

        panel.measure(&surface);
        // leftover 21 over 2 expandables: +10 each, 1px dropped.
        panel.render(&mut surface, Rect::new(0, 0, 41, 5));

        let rects = log.borrow();
        assert_eq!(rects[0], Rect::new(0, 0, 20, 5));
        assert_eq!(rects[1], Rect::new(20, 0, 20, 5));
    }

    #[test]
    fn test_render_after_single_measure_is_stable() {
        let mut surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::SPACE_BETWEEN,
            vec![Box::new(Expand::new(Probe::new(10, 5, &log)))],
        );

        panel.measure(&surface);
        panel.render(&mut surface, Rect::new(0, 0, 50, 5));
        panel.render(&mut surface, Rect::new(0, 0, 50, 5));

        // Expand growth must not compound across renders.
        let rects = log.borrow();
        assert_eq!(rects[0], rects[1]);
        assert_eq!(rects[0].width, 50);
    }

    #[test]
    fn test_cross_stretch_both_orientations() {
        let mut surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Vertical,
            Align::SPACE_BETWEEN | Align::STRETCH,
            vec![Probe::new(10, 5, &log)],
        );
        panel.measure(&surface);
        panel.render(&mut surface, Rect::new(0, 0, 64, 32));
        assert_eq!(log.borrow()[0].width, 64);

        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::SPACE_BETWEEN | Align::STRETCH,
            vec![Probe::new(10, 5, &log)],
        );
        panel.measure(&surface);
        panel.render(&mut surface, Rect::new(0, 0, 64, 32));
        assert_eq!(log.borrow()[0].height, 32);
    }

    #[test]
    fn test_cross_middle_and_end() {
        let mut surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::START | Align::MIDDLE,
            vec![Probe::new(10, 10, &log)],
        );
        panel.measure(&surface);
        panel.render(&mut surface, Rect::new(0, 0, 50, 30));
        assert_eq!(log.borrow()[0].y, 10);

        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::START | Align::BOTTOM,
            vec![Probe::new(10, 10, &log)],
        );
        panel.measure(&surface);
        panel.render(&mut surface, Rect::new(0, 0, 50, 30));
        assert_eq!(log.borrow()[0].y, 20);
    }

    #[test]
    fn test_negative_leftover_packs_children_without_fault() {
        let mut surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::SPACE_BETWEEN,
            vec![Probe::new(30, 5, &log), Probe::new(30, 5, &log)],
        );

        panel.measure(&surface);
        // Measured 60 into 40: no spacing, children keep their sizes and
        // simply run past the right edge.
        panel.render(&mut surface, Rect::new(0, 0, 40, 5));

        let rects = log.borrow();
        assert_eq!(rects[0], Rect::new(0, 0, 30, 5));
        assert_eq!(rects[1], Rect::new(30, 0, 30, 5));
    }

    #[test]
    fn test_negative_leftover_shrinks_expandables() {
        let mut surface = MonoSurface::new();
        let log = rect_log();
        let mut panel = Panel::new(
            Orientation::Horizontal,
            Align::SPACE_BETWEEN,
            vec![
                Probe::new(20, 5, &log),
                Box::new(Expand::new(Probe::new(20, 5, &log))),
            ],
        );

        panel.measure(&surface);
        // Measured 40 into 30: the expandable child soaks the deficit.
        panel.render(&mut surface, Rect::new(0, 0, 30, 5));

        let rects = log.borrow();
        assert_eq!(rects[0], Rect::new(0, 0, 20, 5));
        assert_eq!(rects[1], Rect::new(20, 0, 10, 5));
    }
}
