// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::{Point, Vec2};

/// Input delivered to a [`Session`](crate::Session) tick.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at a pixel position.
    DragStart(Point),
    /// Pointer moved to a pixel position while pressed.
    DragMove(Point),
    /// Pointer released.
    DragEnd,
    /// Wheel movement in pixels; changes the per-axis density.
    Scroll {
        /// Horizontal delta.
        dx: f64,
        /// Vertical delta.
        dy: f64,
    },
    /// Numeric origin edit.
    SetOrigin(Point),
    /// Numeric zoom edit.
    SetZoomFactor(f64),
    /// Numeric bounds edit.
    SetGraphBounds {
        /// Graph X range to show.
        x: Range<f64>,
        /// Graph Y range to show.
        y: Range<f64>,
    },
    /// Fit the camera to the current content.
    ResetCamera,
    /// Restore the default density on both axes.
    ResetFieldOfView,
}

/// Tracks a pointer drag and reports per-move deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    last: Option<Point>,
}

impl DragState {
    /// Starts a drag at `pos`, abandoning any drag in progress.
    pub fn start(&mut self, pos: Point) {
        self.last = Some(pos);
    }

    /// Moves to `pos`, returning the delta since the previous position.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        Some(pos - last)
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}

/// Converts a drag delta into the pan that keeps content under the pointer.
///
/// Pixel Y grows downward while graph Y grows upward, so only X is negated.
#[must_use]
pub fn pan_for_drag(delta: Vec2) -> Vec2 {
    Vec2::new(-delta.x, delta.y)
}
