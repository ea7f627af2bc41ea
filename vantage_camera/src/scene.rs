// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame composition: grid, axes, labels, segments and points.

use peniko::Color;
use vantage_items::{RenderedPoint, RenderedSegment};
use vantage_view2d::{Axis, GridLine, LABEL_MARGIN, Viewport};
use vello_cpu::RenderContext;
use vello_cpu::kurbo::{BezPath, Cap, Circle, Point, Rect, Shape, Stroke};

use crate::label::{GLYPH_HEIGHT, text_path, text_width};

/// Radius, in pixels, of a rendered point.
pub const POINT_RADIUS: f64 = 4.0;

const BACKGROUND: Color = Color::WHITE;
const GRID_COLOR: Color = Color::from_rgb8(200, 200, 200);
const AXIS_COLOR: Color = Color::BLACK;
const LABEL_COLOR: Color = Color::from_rgb8(80, 80, 80);

const GRID_WIDTH: f64 = 1.0;
const AXIS_WIDTH: f64 = 2.0;
const SEGMENT_WIDTH: f64 = 2.0;
const LABEL_STROKE_WIDTH: f64 = 1.0;
const GRID_DASH: [f64; 2] = [4.0, 4.0];
/// Gap between a Y label and the usable region.
const LABEL_GAP: f64 = 4.0;
const CIRCLE_TOLERANCE: f64 = 0.1;

pub(crate) fn draw_scene(
    ctx: &mut RenderContext,
    viewport: &Viewport,
    points: &[RenderedPoint],
    segments: &[RenderedSegment],
) {
    let width = f64::from(viewport.width());
    let height = f64::from(viewport.height());

    ctx.set_paint(BACKGROUND);
    ctx.fill_rect(&Rect::new(0.0, 0.0, width, height));

    let x_grid = viewport.grid_lines(Axis::X);
    let y_grid = viewport.grid_lines(Axis::Y);

    ctx.set_paint(GRID_COLOR);
    ctx.set_stroke(Stroke::new(GRID_WIDTH).with_dashes(0.0, GRID_DASH));
    let mut grid = BezPath::new();
    for line in &x_grid.lines {
        push_line(&mut grid, viewport, Axis::X, line, 0.5);
    }
    for line in &y_grid.lines {
        push_line(&mut grid, viewport, Axis::Y, line, 0.5);
    }
    ctx.stroke_path(&grid);

    // A 2px stroke centered on a pixel edge covers two whole pixels.
    ctx.set_paint(AXIS_COLOR);
    ctx.set_stroke(Stroke::new(AXIS_WIDTH));
    let mut axes = BezPath::new();
    if let Some(zero) = &x_grid.zero_axis {
        push_line(&mut axes, viewport, Axis::X, zero, 0.0);
    }
    if let Some(zero) = &y_grid.zero_axis {
        push_line(&mut axes, viewport, Axis::Y, zero, 0.0);
    }
    ctx.stroke_path(&axes);

    ctx.set_paint(LABEL_COLOR);
    ctx.set_stroke(Stroke::new(LABEL_STROKE_WIDTH).with_caps(Cap::Square));
    let mut labels = BezPath::new();
    for line in x_grid.lines.iter().chain(x_grid.zero_axis.iter()) {
        push_label(&mut labels, Axis::X, line);
    }
    for line in y_grid.lines.iter().chain(y_grid.zero_axis.iter()) {
        push_label(&mut labels, Axis::Y, line);
    }
    ctx.stroke_path(&labels);

    ctx.set_stroke(Stroke::new(SEGMENT_WIDTH).with_caps(Cap::Round));
    for segment in segments {
        let mut path = BezPath::new();
        path.move_to(project_truncated(viewport, segment.start));
        path.line_to(project_truncated(viewport, segment.end));
        ctx.set_paint(segment.color);
        ctx.stroke_path(&path);
    }

    for point in points {
        let center = project_truncated(viewport, point.position);
        ctx.set_paint(point.color);
        ctx.fill_path(&Circle::new(center, POINT_RADIUS).to_path(CIRCLE_TOLERANCE));
    }
}

/// Projects a graph point after truncating it to whole graph units.
fn project_truncated(viewport: &Viewport, pt: Point) -> Point {
    let (px, py) = viewport.pixel_point(Point::new(pt.x.trunc(), pt.y.trunc()));
    Point::new(f64::from(px), f64::from(py))
}

/// Appends a grid line spanning the usable region.
///
/// `nudge` shifts the line off the pixel edge so odd widths land on whole pixels.
fn push_line(path: &mut BezPath, viewport: &Viewport, axis: Axis, line: &GridLine, nudge: f64) {
    let margin = f64::from(LABEL_MARGIN);
    let pos = f64::from(line.pixel) + nudge;
    match axis {
        Axis::X => {
            path.move_to((pos, margin));
            path.line_to((pos, f64::from(viewport.height())));
        }
        Axis::Y => {
            path.move_to((margin, pos));
            path.line_to((f64::from(viewport.width()), pos));
        }
    }
}

/// Appends the label of `line`: X labels centered in the top strip, Y labels
/// right-aligned in the left strip.
fn push_label(path: &mut BezPath, axis: Axis, line: &GridLine) {
    let text = line.value.to_string();
    let w = text_width(&text);
    let margin = f64::from(LABEL_MARGIN);
    let pos = f64::from(line.pixel);
    let origin = match axis {
        Axis::X => Point::new(pos - w / 2.0, (margin - GLYPH_HEIGHT) / 2.0),
        Axis::Y => Point::new(margin - LABEL_GAP - w, pos - GLYPH_HEIGHT / 2.0),
    };
    path.extend(text_path(&text, origin).elements().iter().copied());
}
