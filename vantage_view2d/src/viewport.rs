// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::{Point, Rect};

use crate::error::ViewError;

/// Pixels per graph unit on each axis before zoom is applied.
pub const DEFAULT_PIXELS_PER_UNIT: i32 = 90;

/// Upper bound on the number of ordinary grid lines drawn per axis.
pub const MAX_GRID_LINE_COUNT: usize = 10;

/// Grid lines closer than this many pixels to the zero axis are not drawn.
pub const ZERO_AXIS_CLEARANCE: i32 = 20;

/// Padding, in pixels, kept on each side of a fitted rectangle.
pub const FIT_BUFFER: i32 = 40;

/// Width of the label strip along the left and top canvas edges.
pub const LABEL_MARGIN: i32 = 30;

/// Immutable graph viewport over a fixed-size canvas.
///
/// Maps graph-space coordinates to integer pixels:
///
/// ```text
/// pixel_x(v) = width / 2 + round((v - origin.x) * ppu_x * zoom)
/// pixel_y(v) = height / 2 - round((v - origin.y) * ppu_y * zoom)
/// ```
///
/// All mutating operations return a new `Viewport`; compare it with the old
/// one to detect movement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    origin: Point,
    zoom: f64,
    pixels_per_unit_x: i32,
    pixels_per_unit_y: i32,
    width: u16,
    height: u16,
}

impl Viewport {
    /// Creates a viewport for a `width` x `height` canvas.
    ///
    /// - Origin is `(0, 0)`.
    /// - Zoom factor is `1.0`.
    /// - Both axes use [`DEFAULT_PIXELS_PER_UNIT`].
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            origin: Point::ZERO,
            zoom: 1.0,
            pixels_per_unit_x: DEFAULT_PIXELS_PER_UNIT,
            pixels_per_unit_y: DEFAULT_PIXELS_PER_UNIT,
            width,
            height,
        }
    }

    /// Graph-space point shown at the canvas center.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Uniform zoom multiplier; always finite and positive.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    /// Base pixel density of the X axis, never below 1.
    #[must_use]
    pub fn pixels_per_unit_x(&self) -> i32 {
        self.pixels_per_unit_x
    }

    /// Base pixel density of the Y axis, never below 1.
    #[must_use]
    pub fn pixels_per_unit_y(&self) -> i32 {
        self.pixels_per_unit_y
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Canvas width minus the label strip.
    #[must_use]
    pub fn usable_width(&self) -> i32 {
        (i32::from(self.width) - LABEL_MARGIN).max(0)
    }

    /// Canvas height minus the label strip.
    #[must_use]
    pub fn usable_height(&self) -> i32 {
        (i32::from(self.height) - LABEL_MARGIN).max(0)
    }

    pub(crate) fn scale_x(&self) -> f64 {
        f64::from(self.pixels_per_unit_x) * self.zoom
    }

    pub(crate) fn scale_y(&self) -> f64 {
        f64::from(self.pixels_per_unit_y) * self.zoom
    }

    fn center_x(&self) -> i32 {
        i32::from(self.width) / 2
    }

    fn center_y(&self) -> i32 {
        i32::from(self.height) / 2
    }

    /// Projects a graph-space X value to a pixel column.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate; off-canvas pixels are culled by callers"
    )]
    pub fn pixel_x(&self, value: f64) -> i32 {
        let offset = ((value - self.origin.x) * self.scale_x()).round() as i32;
        self.center_x().saturating_add(offset)
    }

    /// Projects a graph-space Y value to a pixel row.
    ///
    /// Larger graph values map to smaller pixel rows.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate; off-canvas pixels are culled by callers"
    )]
    pub fn pixel_y(&self, value: f64) -> i32 {
        let offset = ((value - self.origin.y) * self.scale_y()).round() as i32;
        self.center_y().saturating_sub(offset)
    }

    /// Projects a graph-space point to pixel coordinates.
    #[must_use]
    pub fn pixel_point(&self, pt: Point) -> (i32, i32) {
        (self.pixel_x(pt.x), self.pixel_y(pt.y))
    }

    fn graph_x_for_pixel(&self, px: i32) -> f64 {
        self.origin.x + f64::from(px - self.center_x()) / self.scale_x()
    }

    fn graph_y_for_pixel(&self, py: i32) -> f64 {
        self.origin.y - f64::from(py - self.center_y()) / self.scale_y()
    }

    /// Converts a pixel back into graph space.
    ///
    /// Returns `None` for pixels inside the label strip or beyond the canvas.
    #[must_use]
    pub fn graph_point_for_pixel(&self, px: i32, py: i32) -> Option<Point> {
        let x_range = LABEL_MARGIN..=self.usable_width() + LABEL_MARGIN;
        let y_range = LABEL_MARGIN..=self.usable_height() + LABEL_MARGIN;
        if !x_range.contains(&px) || !y_range.contains(&py) {
            return None;
        }
        Some(Point::new(
            self.graph_x_for_pixel(px),
            self.graph_y_for_pixel(py),
        ))
    }

    /// Lower-left graph-space corner of the usable region.
    #[must_use]
    pub fn minimum_graph_bounds(&self) -> Point {
        Point::new(
            self.graph_x_for_pixel(LABEL_MARGIN),
            self.graph_y_for_pixel(i32::from(self.height)),
        )
    }

    /// Upper-right graph-space corner of the usable region.
    #[must_use]
    pub fn maximum_graph_bounds(&self) -> Point {
        Point::new(
            self.graph_x_for_pixel(i32::from(self.width)),
            self.graph_y_for_pixel(LABEL_MARGIN),
        )
    }

    /// Graph-space rectangle currently visible in the usable region.
    #[must_use]
    pub fn visible_graph_rect(&self) -> Rect {
        Rect::from_points(self.minimum_graph_bounds(), self.maximum_graph_bounds())
    }

    /// Returns a viewport centered on `origin`.
    pub fn with_origin(self, origin: Point) -> Result<Self, ViewError> {
        if !origin.is_finite() {
            return Err(ViewError::NonFiniteOrigin);
        }
        Ok(Self { origin, ..self })
    }

    /// Returns a viewport with the given zoom factor.
    ///
    /// Zero, negative and non-finite factors are refused.
    pub fn with_zoom_factor(self, zoom: f64) -> Result<Self, ViewError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewError::InvalidZoom(zoom));
        }
        Ok(Self { zoom, ..self })
    }

    /// Shifts the origin by a pixel delta, converted with the current density and zoom.
    ///
    /// The graph-space delta `(dx / (ppu_x * zoom), dy / (ppu_y * zoom))` is
    /// added to the origin as is; callers choose the sign that matches their
    /// input gesture. Non-finite deltas leave the viewport unchanged.
    #[must_use]
    pub fn moved_by_pixel_amount(self, dx: f64, dy: f64) -> Self {
        let origin = Point::new(
            self.origin.x + dx / self.scale_x(),
            self.origin.y + dy / self.scale_y(),
        );
        if !origin.is_finite() {
            return self;
        }
        Self { origin, ..self }
    }

    /// Subtracts `dx`/`dy` from the per-axis pixel densities, flooring each at 1.
    #[must_use]
    pub fn with_field_of_view_changed(self, dx: i32, dy: i32) -> Self {
        Self {
            pixels_per_unit_x: self.pixels_per_unit_x.saturating_sub(dx).max(1),
            pixels_per_unit_y: self.pixels_per_unit_y.saturating_sub(dy).max(1),
            ..self
        }
    }

    /// Restores both axis densities to [`DEFAULT_PIXELS_PER_UNIT`].
    #[must_use]
    pub fn with_default_field_of_view(self) -> Self {
        Self {
            pixels_per_unit_x: DEFAULT_PIXELS_PER_UNIT,
            pixels_per_unit_y: DEFAULT_PIXELS_PER_UNIT,
            ..self
        }
    }

    /// Returns the default origin, zoom and field of view for this canvas.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::new(self.width, self.height)
    }

    /// Fits the graph rectangle `x` by `y` into the usable region.
    ///
    /// The rectangle fills the usable canvas minus [`FIT_BUFFER`] pixels on each
    /// side: each axis gets density `(usable - 2 * FIT_BUFFER) / (max - min)`
    /// (truncated, at least 1), the origin moves to the rectangle's center and
    /// the zoom factor resets to `1.0`.
    ///
    /// Refuses the fit when `min >= max` on either axis.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "densities are truncated to whole pixels and clamped to at least 1"
    )]
    pub fn fitted_to_bounds(self, x: Range<f64>, y: Range<f64>) -> Result<Self, ViewError> {
        // `Range::is_empty` is also true when either end is NaN.
        let finite = x.start.is_finite()
            && x.end.is_finite()
            && y.start.is_finite()
            && y.end.is_finite();
        if !finite || x.is_empty() || y.is_empty() {
            return Err(ViewError::DegenerateBounds { x, y });
        }

        let density = |usable: i32, span: f64| -> i32 {
            let room = f64::from(usable - 2 * FIT_BUFFER);
            ((room / span) as i32).max(1)
        };

        Ok(Self {
            origin: Point::new((x.start + x.end) / 2.0, (y.start + y.end) / 2.0),
            zoom: 1.0,
            pixels_per_unit_x: density(self.usable_width(), x.end - x.start),
            pixels_per_unit_y: density(self.usable_height(), y.end - y.start),
            ..self
        })
    }

    /// Fits the viewport to content with the given bounding box.
    ///
    /// - No content: back to the default origin, zoom and field of view.
    /// - A single distinct point: centered on it, zoom and field of view kept.
    /// - Otherwise: [`Viewport::fitted_to_bounds`] with the bounds truncated to
    ///   whole graph units, which may refuse content thinner than one unit.
    pub fn fitted_to_content(self, bounds: Option<Rect>) -> Result<Self, ViewError> {
        let Some(bounds) = bounds else {
            return Ok(self.reset());
        };
        if bounds.x0 == bounds.x1 && bounds.y0 == bounds.y1 {
            return self.with_origin(bounds.origin());
        }
        self.fitted_to_bounds(
            bounds.x0.trunc()..bounds.x1.trunc(),
            bounds.y0.trunc()..bounds.y1.trunc(),
        )
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{DEFAULT_PIXELS_PER_UNIT, FIT_BUFFER, LABEL_MARGIN, Viewport};
    use crate::error::ViewError;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn origin_projects_to_canvas_center() {
        let vp = Viewport::new(801, 600)
            .with_origin(Point::new(-3.25, 17.5))
            .unwrap()
            .with_zoom_factor(2.5)
            .unwrap()
            .with_field_of_view_changed(30, -12);
        assert_eq!(vp.pixel_x(vp.origin().x), 400);
        assert_eq!(vp.pixel_y(vp.origin().y), 300);
    }

    #[test]
    fn y_axis_is_inverted() {
        let vp = Viewport::new(800, 600);
        assert_eq!(vp.pixel_y(1.0), 300 - DEFAULT_PIXELS_PER_UNIT);
        assert_eq!(vp.pixel_x(1.0), 400 + DEFAULT_PIXELS_PER_UNIT);
        assert!(vp.pixel_y(2.0) < vp.pixel_y(1.0));
    }

    #[test]
    fn pixel_round_trip_within_usable_region() {
        let vp = Viewport::new(800, 600)
            .with_origin(Point::new(1.5, -2.0))
            .unwrap()
            .with_zoom_factor(0.75)
            .unwrap();
        for &(gx, gy) in &[(0.0, 0.0), (1.5, -2.0), (3.1, 0.4), (-1.2, -4.7)] {
            let (px, py) = vp.pixel_point(Point::new(gx, gy));
            let back = vp
                .graph_point_for_pixel(px, py)
                .expect("pixel should be in the usable region");
            assert!(close(back.x, gx, 1.0), "x {gx} came back as {}", back.x);
            assert!(close(back.y, gy, 1.0), "y {gy} came back as {}", back.y);
        }
    }

    #[test]
    fn pixels_outside_usable_region_have_no_graph_point() {
        let vp = Viewport::new(800, 600);
        assert_eq!(vp.graph_point_for_pixel(LABEL_MARGIN - 1, 300), None);
        assert_eq!(vp.graph_point_for_pixel(400, LABEL_MARGIN - 1), None);
        assert_eq!(vp.graph_point_for_pixel(801, 300), None);
        assert_eq!(vp.graph_point_for_pixel(400, 601), None);
        assert!(vp.graph_point_for_pixel(LABEL_MARGIN, LABEL_MARGIN).is_some());
        assert!(vp.graph_point_for_pixel(800, 600).is_some());
    }

    #[test]
    fn graph_bounds_match_usable_corners() {
        let vp = Viewport::new(800, 600);
        let min = vp.minimum_graph_bounds();
        let max = vp.maximum_graph_bounds();
        assert!(close(min.x, f64::from(LABEL_MARGIN - 400) / 90.0, 1e-12));
        assert!(close(min.y, -300.0 / 90.0, 1e-12));
        assert!(close(max.x, 400.0 / 90.0, 1e-12));
        assert!(close(max.y, f64::from(300 - LABEL_MARGIN) / 90.0, 1e-12));

        let zoomed = vp.with_zoom_factor(2.0).unwrap();
        assert!(close(zoomed.maximum_graph_bounds().x, max.x / 2.0, 1e-12));
    }

    #[test]
    fn invalid_zoom_is_refused() {
        let vp = Viewport::new(800, 600);
        assert_eq!(vp.with_zoom_factor(0.0), Err(ViewError::InvalidZoom(0.0)));
        assert_eq!(vp.with_zoom_factor(-1.0), Err(ViewError::InvalidZoom(-1.0)));
        assert!(vp.with_zoom_factor(f64::NAN).is_err());
        assert!(vp.with_zoom_factor(f64::INFINITY).is_err());
        assert_eq!(vp.with_zoom_factor(0.5).unwrap().zoom_factor(), 0.5);
    }

    #[test]
    fn move_by_pixel_amount_scales_by_density_and_zoom() {
        let vp = Viewport::new(800, 600).with_zoom_factor(2.0).unwrap();
        let moved = vp.moved_by_pixel_amount(180.0, -90.0);
        assert!(close(moved.origin().x, 1.0, 1e-12));
        assert!(close(moved.origin().y, -0.5, 1e-12));
        assert_eq!(vp.moved_by_pixel_amount(f64::NAN, 0.0), vp);
    }

    #[test]
    fn field_of_view_never_drops_below_one() {
        let mut vp = Viewport::new(800, 600);
        for _ in 0..50 {
            vp = vp.with_field_of_view_changed(37, 1_000);
        }
        assert_eq!(vp.pixels_per_unit_x(), 1);
        assert_eq!(vp.pixels_per_unit_y(), 1);

        vp = vp.with_field_of_view_changed(i32::MAX, i32::MAX);
        assert_eq!(vp.pixels_per_unit_x(), 1);

        let restored = vp.with_field_of_view_changed(-9, -19).with_default_field_of_view();
        assert_eq!(restored.pixels_per_unit_x(), DEFAULT_PIXELS_PER_UNIT);
        assert_eq!(restored.pixels_per_unit_y(), DEFAULT_PIXELS_PER_UNIT);
    }

    #[test]
    fn fit_centers_origin_and_resets_zoom() {
        let vp = Viewport::new(800, 600).with_zoom_factor(3.0).unwrap();
        let cases = [
            (0.0..10.0, 0.0..5.0),
            (-7.5..-2.5, 100.0..101.0),
            (-1e6..1e6, -0.25..0.25),
        ];
        for (x, y) in cases {
            let fitted = vp.fitted_to_bounds(x.clone(), y.clone()).unwrap();
            assert_eq!(fitted.zoom_factor(), 1.0);
            assert!(close(fitted.origin().x, (x.start + x.end) / 2.0, 1e-9));
            assert!(close(fitted.origin().y, (y.start + y.end) / 2.0, 1e-9));
        }
    }

    #[test]
    fn fit_density_fills_usable_region_minus_buffer() {
        let vp = Viewport::new(830, 630);
        let fitted = vp.fitted_to_bounds(0.0..8.0, 0.0..4.0).unwrap();
        // usable 800x600, minus 2 * 40 buffer = 720x520.
        assert_eq!(fitted.pixels_per_unit_x(), 720 / 8);
        assert_eq!(fitted.pixels_per_unit_y(), 520 / 4);
        assert_eq!(2 * FIT_BUFFER, 80);

        let huge = vp.fitted_to_bounds(0.0..1e9, 0.0..1e9).unwrap();
        assert_eq!(huge.pixels_per_unit_x(), 1);
    }

    #[test]
    fn degenerate_fit_is_refused_without_change() {
        let vp = Viewport::new(800, 600)
            .with_origin(Point::new(2.0, 3.0))
            .unwrap()
            .with_zoom_factor(1.5)
            .unwrap();
        for (x, y) in [
            (1.0..1.0, 0.0..1.0),
            (0.0..1.0, 5.0..-5.0),
            (3.0..2.0, 3.0..2.0),
            (f64::NAN..1.0, 0.0..1.0),
        ] {
            let err = vp.fitted_to_bounds(x, y).unwrap_err();
            assert!(matches!(err, ViewError::DegenerateBounds { .. }));
        }
    }

    #[test]
    fn content_fit_policy() {
        let vp = Viewport::new(800, 600)
            .with_origin(Point::new(9.0, 9.0))
            .unwrap()
            .with_zoom_factor(4.0)
            .unwrap()
            .with_field_of_view_changed(10, 20);

        let empty = vp.fitted_to_content(None).unwrap();
        assert_eq!(empty, Viewport::new(800, 600));

        let single = vp
            .fitted_to_content(Some(Rect::new(4.0, 4.0, 4.0, 4.0)))
            .unwrap();
        assert_eq!(single.origin(), Point::new(4.0, 4.0));
        assert_eq!(single.zoom_factor(), 4.0);
        assert_eq!(single.pixels_per_unit_x(), vp.pixels_per_unit_x());
        assert_eq!(single.pixels_per_unit_y(), vp.pixels_per_unit_y());

        let spread = vp
            .fitted_to_content(Some(Rect::new(-1.9, 0.2, 5.7, 6.9)))
            .unwrap();
        // Truncated to -1..5 and 0..6.
        assert_eq!(spread.origin(), Point::new(2.0, 3.0));
        assert_eq!(spread.zoom_factor(), 1.0);

        // A horizontal line truncates to a zero-height range.
        assert!(
            vp.fitted_to_content(Some(Rect::new(0.0, 1.0, 10.0, 1.0)))
                .is_err()
        );
    }
}
