// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, Ordering};

use kurbo::{Point, Rect};

use crate::point::{RenderedPoint, RenderedSegment};

/// Read-only views of the content to draw for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItemsSnapshot<'a> {
    /// Standalone points, in emission order.
    pub points: &'a [RenderedPoint],
    /// Line segments, in emission order.
    pub segments: &'a [RenderedSegment],
}

/// Points and segments produced by one successful script run.
///
/// The contents are frozen once built. The bounding box covers every point the
/// collection references, standalone points and segment endpoints alike.
#[derive(Debug)]
pub struct GraphedItems {
    points: Vec<RenderedPoint>,
    segments: Vec<RenderedSegment>,
    min: Option<Point>,
    max: Option<Point>,
    changed: AtomicBool,
}

impl GraphedItems {
    /// Creates an empty collection.
    #[must_use]
    pub fn empty() -> Self {
        GraphedItemsBuilder::new().build()
    }

    /// Returns the standalone points.
    #[must_use]
    pub fn points(&self) -> &[RenderedPoint] {
        &self.points
    }

    /// Returns the segments.
    #[must_use]
    pub fn segments(&self) -> &[RenderedSegment] {
        &self.segments
    }

    /// Returns `true` when the collection holds neither points nor segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.segments.is_empty()
    }

    /// Componentwise minimum over every referenced point, or `None` when empty.
    #[must_use]
    pub fn min_coordinates(&self) -> Option<Point> {
        self.min
    }

    /// Componentwise maximum over every referenced point, or `None` when empty.
    #[must_use]
    pub fn max_coordinates(&self) -> Option<Point> {
        self.max
    }

    /// Bounding rectangle of the content, or `None` when empty.
    ///
    /// The rectangle may have zero width or height when all content lies on
    /// a line or at a single point.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(Rect::from_points(min, max)),
            _ => None,
        }
    }

    /// Returns flattened read-only views of both sequences.
    #[must_use]
    pub fn items_to_render(&self) -> ItemsSnapshot<'_> {
        ItemsSnapshot {
            points: &self.points,
            segments: &self.segments,
        }
    }

    /// Returns whether the collection has not been rendered yet, clearing the flag.
    ///
    /// This is edge-triggered: the first call on a fresh collection returns
    /// `true`, every later call returns `false`.
    pub fn take_changed(&self) -> bool {
        self.changed.swap(false, Ordering::AcqRel)
    }
}

impl Default for GraphedItems {
    fn default() -> Self {
        Self::empty()
    }
}

/// Accumulates the output of the emit calls made during one script run.
#[derive(Clone, Debug, Default)]
pub struct GraphedItemsBuilder {
    points: Vec<RenderedPoint>,
    segments: Vec<RenderedSegment>,
}

impl GraphedItemsBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point.
    pub fn push_point(&mut self, point: RenderedPoint) {
        self.points.push(point);
    }

    /// Appends a segment.
    pub fn push_segment(&mut self, segment: RenderedSegment) {
        self.segments.push(segment);
    }

    /// Appends every point yielded by `points`.
    pub fn extend_points(&mut self, points: impl IntoIterator<Item = RenderedPoint>) {
        self.points.extend(points);
    }

    /// Appends every segment yielded by `segments`.
    pub fn extend_segments(&mut self, segments: impl IntoIterator<Item = RenderedSegment>) {
        self.segments.extend(segments);
    }

    /// Number of points recorded so far.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of segments recorded so far.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Freezes the accumulated content into a [`GraphedItems`].
    #[must_use]
    pub fn build(self) -> GraphedItems {
        let referenced = self
            .points
            .iter()
            .map(|p| p.position)
            .chain(self.segments.iter().flat_map(RenderedSegment::endpoints));

        let mut min: Option<Point> = None;
        let mut max: Option<Point> = None;
        for pt in referenced {
            min = Some(match min {
                Some(m) => Point::new(m.x.min(pt.x), m.y.min(pt.y)),
                None => pt,
            });
            max = Some(match max {
                Some(m) => Point::new(m.x.max(pt.x), m.y.max(pt.y)),
                None => pt,
            });
        }

        GraphedItems {
            points: self.points,
            segments: self.segments,
            min,
            max,
            changed: AtomicBool::new(true),
        }
    }
}
