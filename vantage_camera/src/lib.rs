// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Camera: viewport state plus a reusable raster surface.
//!
//! [`Camera`] owns the current [`Viewport`] snapshot, a "moved since the last
//! render" flag, and a single CPU raster surface backed by
//! [`vello_cpu::RenderContext`]. Each call to [`Camera::render`]:
//! 1. clears the surface,
//! 2. draws the adaptive grid, its labels and the zero axes,
//! 3. draws every segment and then every point, with graph coordinates
//!    truncated to whole units before projection,
//! 4. clears the moved flag,
//! 5. returns a [`Frame`] borrowing the surface read-only.
//!
//! The surface is allocated once and reused. Because [`Frame`] borrows the
//! camera, a frame cannot outlive the next render or any camera mutation.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use vantage_camera::Camera;
//! use vantage_items::RenderedPoint;
//!
//! let mut camera = Camera::new(320, 240);
//! camera.move_by_pixel_amount(45.0, 0.0);
//! assert!(camera.has_moved());
//!
//! let dot = RenderedPoint::new(Point::new(1.0, 1.0), Color::from_rgb8(200, 0, 0));
//! let frame = camera.render(&[dot], &[]);
//! assert_eq!((frame.width(), frame.height()), (320, 240));
//! assert!(!camera.has_moved());
//! ```

mod camera;
mod label;
mod scene;
mod surface;

pub use camera::Camera;
pub use scene::POINT_RADIUS;
pub use surface::Frame;
pub use vantage_view2d::{Axis, GridLine, GridLines, ViewError, Viewport};
