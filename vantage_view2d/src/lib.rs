// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage View 2D: the viewport model behind the graph camera.
//!
//! A [`Viewport`] is an immutable snapshot of everything needed to map between
//! graph space (unbounded `f64` coordinates) and pixel space (a fixed-size
//! canvas):
//! - the graph-space origin shown at the canvas center,
//! - a uniform zoom factor,
//! - an independent pixel density per axis (the "field of view"),
//! - the canvas dimensions and the strip reserved for axis labels.
//!
//! Every mutation returns a new snapshot instead of changing the old one, so
//! callers compare snapshots to learn whether anything moved. Invalid requests
//! (a non-positive zoom, inverted fit bounds) return a [`ViewError`] and leave
//! the caller holding the unchanged snapshot.
//!
//! The crate also decides which grid lines are worth drawing. See
//! [`Viewport::grid_lines`]: at most [`MAX_GRID_LINE_COUNT`] lines per axis
//! regardless of zoom, with lines too close to the zero axis suppressed.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use vantage_view2d::{Axis, Viewport};
//!
//! let view = Viewport::new(800, 600);
//! assert_eq!(view.pixel_x(0.0), 400);
//! assert_eq!(view.pixel_y(0.0), 300);
//!
//! // Fit a rectangle of graph space into the canvas.
//! let fitted = view.fitted_to_bounds(-2.0..6.0, 0.0..4.0).unwrap();
//! assert_eq!(fitted.origin(), Point::new(2.0, 2.0));
//! assert_eq!(fitted.zoom_factor(), 1.0);
//!
//! // Inverted bounds are rejected.
//! assert!(view.fitted_to_bounds(3.0..1.0, 0.0..1.0).is_err());
//!
//! let grid = fitted.grid_lines(Axis::X);
//! assert!(grid.lines.len() <= vantage_view2d::MAX_GRID_LINE_COUNT);
//! ```
//!
//! ## Pixel conventions
//!
//! - Pixel X grows to the right, pixel Y grows downwards; graph Y grows upwards.
//! - The canvas center is `(width / 2, height / 2)` using integer division.
//! - Labels occupy a [`LABEL_MARGIN`]-pixel strip along the left and top
//!   edges; the remainder of the canvas is the usable region.

mod error;
mod grid;
mod viewport;

pub use error::ViewError;
pub use grid::{Axis, GridLine, GridLines};
pub use viewport::{
    DEFAULT_PIXELS_PER_UNIT, FIT_BUFFER, LABEL_MARGIN, MAX_GRID_LINE_COUNT, Viewport,
    ZERO_AXIS_CLEARANCE,
};
