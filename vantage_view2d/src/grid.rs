// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid line selection.

use crate::viewport::{MAX_GRID_LINE_COUNT, Viewport, ZERO_AXIS_CLEARANCE};

/// One of the two graph axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis; its grid lines are vertical.
    X,
    /// Vertical axis; its grid lines are horizontal.
    Y,
}

/// A grid line at a whole graph value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLine {
    /// Graph value the line marks; also its label.
    pub value: i64,
    /// Pixel column (for [`Axis::X`]) or row (for [`Axis::Y`]).
    pub pixel: i32,
}

/// Grid lines chosen for one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLines {
    /// Axis the lines belong to.
    pub axis: Axis,
    /// Step between candidate values, in graph units.
    pub increment: i64,
    /// Ordinary lines, ascending by value. Never longer than [`MAX_GRID_LINE_COUNT`].
    pub lines: Vec<GridLine>,
    /// The zero axis, when it falls on the canvas.
    pub zero_axis: Option<GridLine>,
}

impl Viewport {
    /// Number of whole graph units that fit in the usable extent of `axis`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the count saturates for absurdly small zoom factors"
    )]
    pub fn visible_unit_count(&self, axis: Axis) -> i64 {
        let (usable, scale) = match axis {
            Axis::X => (self.usable_width(), self.scale_x()),
            Axis::Y => (self.usable_height(), self.scale_y()),
        };
        (f64::from(usable) / scale).floor() as i64
    }

    /// Chooses the grid lines to draw along `axis`.
    ///
    /// Candidate values start at `floor(origin - count / 2)` and step by the
    /// increment up to `count / 2` units past the origin, where `count` is
    /// [`Viewport::visible_unit_count`]. The increment is 1 while all
    /// `count + 1` candidates fit under [`MAX_GRID_LINE_COUNT`], and grows
    /// just enough to keep them under it otherwise.
    ///
    /// The endpoint is inclusive, so exactly `count == MAX_GRID_LINE_COUNT`
    /// visible units already steps by 2: stepping by 1 would yield eleven
    /// candidates, all on the canvas when zero is not among them.
    ///
    /// Candidates whose pixel falls off the canvas are dropped, as are
    /// non-zero candidates within [`ZERO_AXIS_CLEARANCE`] pixels of the zero
    /// axis. The zero axis is reported separately and is present whenever it
    /// is on the canvas.
    #[must_use]
    pub fn grid_lines(&self, axis: Axis) -> GridLines {
        let (origin, extent) = match axis {
            Axis::X => (self.origin().x, i32::from(self.width())),
            Axis::Y => (self.origin().y, i32::from(self.height())),
        };
        let project = |value: f64| match axis {
            Axis::X => self.pixel_x(value),
            Axis::Y => self.pixel_y(value),
        };
        let on_canvas = |pixel: i32| (0..=extent).contains(&pixel);

        let count = self.visible_unit_count(axis).max(0);
        let max = MAX_GRID_LINE_COUNT as i64;
        let increment = if count < max {
            1
        } else {
            (count.saturating_add(max)) / max
        };

        let zero_pixel = project(0.0);
        let zero_axis = on_canvas(zero_pixel).then_some(GridLine {
            value: 0,
            pixel: zero_pixel,
        });

        #[allow(
            clippy::cast_possible_truncation,
            reason = "grid values are whole graph units; far-off origins saturate"
        )]
        let start = (origin - count as f64 / 2.0).floor() as i64;

        let mut lines = Vec::new();
        for step in 0..=count / increment {
            let value = start.saturating_add(step.saturating_mul(increment));
            if value == 0 {
                continue;
            }
            let pixel = project(value as f64);
            if !on_canvas(pixel) {
                continue;
            }
            if pixel.abs_diff(zero_pixel) <= ZERO_AXIS_CLEARANCE.unsigned_abs() {
                continue;
            }
            lines.push(GridLine { value, pixel });
        }

        GridLines {
            axis,
            increment,
            lines,
            zero_axis,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::Axis;
    use crate::viewport::{MAX_GRID_LINE_COUNT, Viewport, ZERO_AXIS_CLEARANCE};

    #[test]
    fn default_view_has_unit_lines() {
        let vp = Viewport::new(800, 600);
        // usable 770 / 90 = 8 whole units.
        assert_eq!(vp.visible_unit_count(Axis::X), 8);
        let grid = vp.grid_lines(Axis::X);
        assert_eq!(grid.increment, 1);
        let values: Vec<i64> = grid.lines.iter().map(|l| l.value).collect();
        assert_eq!(values, [-4, -3, -2, -1, 1, 2, 3, 4]);
        assert_eq!(grid.zero_axis.map(|z| z.pixel), Some(400));
    }

    #[test]
    fn y_lines_follow_inverted_projection() {
        let vp = Viewport::new(800, 600);
        let grid = vp.grid_lines(Axis::Y);
        for line in &grid.lines {
            assert_eq!(line.pixel, vp.pixel_y(line.value as f64));
        }
        let first = grid.lines.first().unwrap();
        let last = grid.lines.last().unwrap();
        assert!(first.value < last.value);
        assert!(first.pixel > last.pixel);
    }

    #[test]
    fn line_count_is_bounded_for_any_zoom() {
        let base = Viewport::new(1024, 768);
        let zooms = [1e-9, 1e-4, 0.013, 0.1, 0.33, 0.5, 0.9, 1.0, 2.0, 7.5, 1e3];
        let fovs = [(0, 0), (89, 89), (60, -400), (-1000, 45)];
        for zoom in zooms {
            for (dx, dy) in fovs {
                let vp = base
                    .with_zoom_factor(zoom)
                    .unwrap()
                    .with_field_of_view_changed(dx, dy)
                    .with_origin(Point::new(13.7, -250.2))
                    .unwrap();
                for axis in [Axis::X, Axis::Y] {
                    let grid = vp.grid_lines(axis);
                    assert!(
                        grid.lines.len() <= MAX_GRID_LINE_COUNT,
                        "{} lines at zoom {zoom}, fov ({dx}, {dy}), axis {axis:?}",
                        grid.lines.len()
                    );
                }
            }
        }
    }

    #[test]
    fn increment_grows_when_zoomed_out() {
        let vp = Viewport::new(800, 600).with_zoom_factor(0.1).unwrap();
        // 770 / 9 = 85 units visible.
        assert_eq!(vp.visible_unit_count(Axis::X), 85);
        let grid = vp.grid_lines(Axis::X);
        assert_eq!(grid.increment, 9);
        for pair in grid.lines.windows(2) {
            assert_eq!((pair[1].value - pair[0].value) % 9, 0);
        }
    }

    #[test]
    fn ten_visible_units_step_by_two() {
        // 930 - 30 = 900 px, exactly ten units at the default density.
        let vp = Viewport::new(930, 600)
            .with_origin(Point::new(100.0, 0.0))
            .unwrap();
        assert_eq!(vp.visible_unit_count(Axis::X), 10);
        let grid = vp.grid_lines(Axis::X);
        assert_eq!(grid.increment, 2);
        let values: Vec<i64> = grid.lines.iter().map(|l| l.value).collect();
        assert_eq!(values, [95, 97, 99, 101, 103, 105]);

        let narrower = Viewport::new(929, 600);
        assert_eq!(narrower.visible_unit_count(Axis::X), 9);
        assert_eq!(narrower.grid_lines(Axis::X).increment, 1);
    }

    #[test]
    fn lines_near_zero_axis_are_suppressed() {
        // 20 px per unit: the lines at -1 and 1 sit exactly 20 px from zero.
        let vp = Viewport::new(800, 600).with_field_of_view_changed(70, 70);
        let grid = vp.grid_lines(Axis::X);
        let zero = grid.zero_axis.expect("zero axis is on screen");
        assert!(grid.lines.iter().all(|l| (l.pixel - zero.pixel).abs() > ZERO_AXIS_CLEARANCE));
        assert!(grid.lines.iter().all(|l| l.value != 0));
    }

    #[test]
    fn zero_axis_absent_when_off_canvas() {
        let vp = Viewport::new(800, 600)
            .with_origin(Point::new(1_000.0, -1_000.0))
            .unwrap();
        assert_eq!(vp.grid_lines(Axis::X).zero_axis, None);
        assert_eq!(vp.grid_lines(Axis::Y).zero_axis, None);
        assert!(!vp.grid_lines(Axis::X).lines.is_empty());
    }

    #[test]
    fn lines_stay_on_canvas() {
        let vp = Viewport::new(640, 480)
            .with_origin(Point::new(0.37, 2.9))
            .unwrap()
            .with_zoom_factor(1.7)
            .unwrap();
        for line in vp.grid_lines(Axis::X).lines {
            assert!((0..=640).contains(&line.pixel));
        }
        for line in vp.grid_lines(Axis::Y).lines {
            assert!((0..=480).contains(&line.pixel));
        }
    }
}
