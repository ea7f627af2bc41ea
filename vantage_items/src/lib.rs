// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Items: the content a script run produces for the graph.
//!
//! A script run emits colored points and line segments in graph space. This
//! crate holds those artifacts:
//! - [`RenderedPoint`] and [`RenderedSegment`], plain value types built on
//!   [`kurbo::Point`] and [`peniko::Color`].
//! - [`GraphedItems`], the frozen result of one run, with its bounding box and
//!   an edge-triggered "changed since last render" flag.
//! - [`GraphedItemsBuilder`], which accumulates the output of several emit
//!   calls within a single run.
//!
//! A new run always produces a new [`GraphedItems`]; an existing collection is
//! never mutated, so a render loop can keep drawing the previous result while
//! the next run is in flight.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use vantage_items::{GraphedItemsBuilder, RenderedPoint, RenderedSegment};
//!
//! let red = Color::from_rgb8(255, 0, 0);
//! let mut builder = GraphedItemsBuilder::new();
//! builder.push_point(RenderedPoint::new(Point::new(1.0, 1.0), red));
//! builder.push_segment(RenderedSegment::new(
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 2.0),
//!     red,
//! ));
//! let items = builder.build();
//!
//! assert_eq!(items.min_coordinates(), Some(Point::new(0.0, 0.0)));
//! assert_eq!(items.max_coordinates(), Some(Point::new(2.0, 2.0)));
//!
//! // A fresh collection reports a change exactly once.
//! assert!(items.take_changed());
//! assert!(!items.take_changed());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod items;
mod point;

pub use items::{GraphedItems, GraphedItemsBuilder, ItemsSnapshot};
pub use point::{DEFAULT_COLOR, RenderedPoint, RenderedSegment};
