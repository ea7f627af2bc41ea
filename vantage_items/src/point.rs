// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use peniko::Color;

/// Color used when a script does not name one.
pub const DEFAULT_COLOR: Color = Color::BLACK;

/// A single graphed point with its color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedPoint {
    /// Position in graph space.
    pub position: Point,
    /// Fill color of the rendered dot.
    pub color: Color,
}

impl RenderedPoint {
    /// Creates a point at `position` drawn in `color`.
    #[must_use]
    pub const fn new(position: Point, color: Color) -> Self {
        Self { position, color }
    }
}

/// A graphed line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedSegment {
    /// First endpoint in graph space.
    pub start: Point,
    /// Second endpoint in graph space.
    pub end: Point,
    /// Stroke color.
    pub color: Color,
}

impl RenderedSegment {
    /// Creates a segment from `start` to `end` drawn in `color`.
    #[must_use]
    pub const fn new(start: Point, end: Point, color: Color) -> Self {
        Self { start, end, color }
    }

    /// Both endpoints, in order.
    #[must_use]
    pub const fn endpoints(&self) -> [Point; 2] {
        [self.start, self.end]
    }
}
