// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use peniko::Color;
use vantage_items::{
    DEFAULT_COLOR, GraphedItems, GraphedItemsBuilder, RenderedPoint, RenderedSegment,
};

use crate::error::{ConversionError, ScriptError};
use crate::value::ScriptValue;

/// Executes user scripts, feeding their emit calls into a recorder.
pub trait ScriptHost {
    /// Runs `source` to completion.
    ///
    /// Emit calls go to `recorder`. On error the recorder's content is
    /// discarded by the caller.
    fn run(&mut self, source: &str, recorder: &mut ItemsRecorder) -> Result<(), ScriptError>;
}

/// Splits emit-call arguments into a color and a flat list of points.
///
/// Only the first argument may be a color. Every other argument must be a
/// point (a list of exactly two finite numbers) or a list of accepted values,
/// which is flattened in order.
pub fn parse_emit_args(args: &[ScriptValue]) -> Result<(Color, Vec<Point>), ConversionError> {
    let (color, rest) = match args.split_first() {
        Some((ScriptValue::Color(color), rest)) => (*color, rest),
        _ => (DEFAULT_COLOR, args),
    };
    let mut points = Vec::new();
    for arg in rest {
        flatten_into(arg, &mut points)?;
    }
    Ok((color, points))
}

fn flatten_into(value: &ScriptValue, out: &mut Vec<Point>) -> Result<(), ConversionError> {
    let ScriptValue::List(items) = value else {
        return Err(ConversionError::new(value.clone()));
    };
    if let [ScriptValue::Number(x), ScriptValue::Number(y)] = items.as_slice() {
        if !x.is_finite() || !y.is_finite() {
            return Err(ConversionError::new(value.clone()));
        }
        out.push(Point::new(*x, *y));
        return Ok(());
    }
    for item in items {
        if !matches!(item, ScriptValue::List(_)) {
            // A scalar inside a list that is not a pair: blame the whole list.
            return Err(ConversionError::new(value.clone()));
        }
        flatten_into(item, out)?;
    }
    Ok(())
}

/// Collects the emit calls of a single script run.
///
/// A failed call appends nothing.
#[derive(Debug, Default)]
pub struct ItemsRecorder {
    builder: GraphedItemsBuilder,
}

impl ItemsRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one point per flattened argument; returns how many were added.
    pub fn emit_points(&mut self, args: &[ScriptValue]) -> Result<usize, ConversionError> {
        let (color, points) = parse_emit_args(args)?;
        let count = points.len();
        self.builder
            .extend_points(points.into_iter().map(|p| RenderedPoint::new(p, color)));
        Ok(count)
    }

    /// Joins consecutive flattened points into segments; returns how many were added.
    ///
    /// `n` points produce `n - 1` segments, so fewer than two produce none.
    pub fn emit_segments(&mut self, args: &[ScriptValue]) -> Result<usize, ConversionError> {
        let (color, points) = parse_emit_args(args)?;
        let before = self.builder.segment_count();
        self.builder.extend_segments(
            points
                .windows(2)
                .map(|pair| RenderedSegment::new(pair[0], pair[1], color)),
        );
        Ok(self.builder.segment_count() - before)
    }

    /// Freezes everything recorded so far.
    #[must_use]
    pub fn finish(self) -> GraphedItems {
        self.builder.build()
    }
}
