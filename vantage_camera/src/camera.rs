// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::{Point, Rect};
use vantage_items::{GraphedItems, RenderedPoint, RenderedSegment};
use vantage_view2d::{ViewError, Viewport};

use crate::scene::draw_scene;
use crate::surface::{Frame, Surface};

/// Graph camera: the current viewport, a moved flag and the raster surface.
///
/// Every mutator computes the next [`Viewport`] snapshot and adopts it through
/// [`Camera::transition`]. Adopting a snapshot that differs from the current
/// one sets the moved flag; [`Camera::render`] clears it.
///
/// Refused changes (see [`ViewError`]) leave the camera untouched and return
/// the error so the caller can report it.
#[derive(Debug)]
pub struct Camera {
    viewport: Viewport,
    moved: bool,
    surface: Surface,
}

impl Camera {
    /// Creates a camera with a `width` x `height` surface and default view.
    ///
    /// The camera starts out moved, since nothing has been rendered yet.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            moved: true,
            surface: Surface::new(width, height),
        }
    }

    /// Returns the current viewport snapshot.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the viewport changed since the last render.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Graph-space point at the canvas center.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.viewport.origin()
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.viewport.zoom_factor()
    }

    /// Lower-left graph-space corner of the visible region.
    #[must_use]
    pub fn minimum_graph_bounds(&self) -> Point {
        self.viewport.minimum_graph_bounds()
    }

    /// Upper-right graph-space corner of the visible region.
    #[must_use]
    pub fn maximum_graph_bounds(&self) -> Point {
        self.viewport.maximum_graph_bounds()
    }

    /// See [`Viewport::pixel_x`].
    #[must_use]
    pub fn pixel_x(&self, value: f64) -> i32 {
        self.viewport.pixel_x(value)
    }

    /// See [`Viewport::pixel_y`].
    #[must_use]
    pub fn pixel_y(&self, value: f64) -> i32 {
        self.viewport.pixel_y(value)
    }

    /// See [`Viewport::graph_point_for_pixel`].
    #[must_use]
    pub fn graph_point_for_pixel(&self, px: i32, py: i32) -> Option<Point> {
        self.viewport.graph_point_for_pixel(px, py)
    }

    /// Adopts `next` as the current viewport.
    ///
    /// Returns `true` and marks the camera moved when `next` differs from the
    /// current snapshot; otherwise does nothing.
    pub fn transition(&mut self, next: Viewport) -> bool {
        if next == self.viewport {
            return false;
        }
        tracing::trace!(
            origin = ?next.origin(),
            zoom = next.zoom_factor(),
            ppu_x = next.pixels_per_unit_x(),
            ppu_y = next.pixels_per_unit_y(),
            "camera moved"
        );
        self.viewport = next;
        self.moved = true;
        true
    }

    /// Centers the view on `origin`.
    pub fn set_origin(&mut self, origin: Point) -> Result<bool, ViewError> {
        let next = self.viewport.with_origin(origin)?;
        Ok(self.transition(next))
    }

    /// Sets the zoom factor; non-positive or non-finite values are refused.
    pub fn set_zoom_factor(&mut self, zoom: f64) -> Result<bool, ViewError> {
        let next = self.viewport.with_zoom_factor(zoom)?;
        Ok(self.transition(next))
    }

    /// Pans by a pixel delta. See [`Viewport::moved_by_pixel_amount`].
    pub fn move_by_pixel_amount(&mut self, dx: f64, dy: f64) -> bool {
        self.transition(self.viewport.moved_by_pixel_amount(dx, dy))
    }

    /// Shrinks (or, with negative deltas, grows) the per-axis pixel density.
    pub fn change_field_of_view(&mut self, dx: i32, dy: i32) -> bool {
        self.transition(self.viewport.with_field_of_view_changed(dx, dy))
    }

    /// Restores the default pixel density on both axes.
    pub fn reset_field_of_view(&mut self) -> bool {
        self.transition(self.viewport.with_default_field_of_view())
    }

    /// Fits the graph rectangle `x` by `y` into the canvas.
    pub fn set_graph_bounds(&mut self, x: Range<f64>, y: Range<f64>) -> Result<bool, ViewError> {
        let next = self.viewport.fitted_to_bounds(x, y)?;
        Ok(self.transition(next))
    }

    /// Fits the view to content with the given bounding box.
    ///
    /// See [`Viewport::fitted_to_content`] for the policy.
    pub fn fit_to_content(&mut self, bounds: Option<Rect>) -> Result<bool, ViewError> {
        let next = self.viewport.fitted_to_content(bounds)?;
        Ok(self.transition(next))
    }

    /// Renders the grid and the given content, clearing the moved flag.
    ///
    /// Pass empty slices to render only the grid.
    pub fn render(&mut self, points: &[RenderedPoint], segments: &[RenderedSegment]) -> Frame<'_> {
        tracing::debug!(
            points = points.len(),
            segments = segments.len(),
            "rendering frame"
        );
        self.moved = false;
        let viewport = self.viewport;
        self.surface
            .paint(|ctx| draw_scene(ctx, &viewport, points, segments))
    }

    /// Renders everything in `items`.
    ///
    /// This does not consume the collection's changed flag.
    pub fn render_items(&mut self, items: &GraphedItems) -> Frame<'_> {
        let snapshot = items.items_to_render();
        self.render(snapshot.points, snapshot.segments)
    }

    /// The frame produced by the most recent render, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<Frame<'_>> {
        self.surface.last_frame()
    }
}
