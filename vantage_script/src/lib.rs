// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Script: the boundary between a script host and the graph.
//!
//! A hosted script produces content through two variadic calls,
//! `emit_points(color?, point_or_points...)` and
//! `emit_segments(color?, point_or_points...)`. Hosts translate their own
//! values into [`ScriptValue`], a closed set of shapes, and hand them to an
//! [`ItemsRecorder`]:
//! - a leading [`ScriptValue::Color`] picks the color, otherwise
//!   [`vantage_items::DEFAULT_COLOR`] is used;
//! - a list of exactly two numbers is a point;
//! - any other list is a sequence and is flattened recursively;
//! - everything else fails with a [`ConversionError`] naming the value.
//!
//! A run either succeeds and yields a new frozen
//! [`GraphedItems`](vantage_items::GraphedItems), or fails with a
//! [`ScriptError`] and yields nothing. [`ScriptRunner`] stamps each run with
//! a generation and publishes results into a [`Publication`] that the render
//! loop polls; results from a run older than the last published one are
//! dropped.
//!
//! [`JsonScriptHost`] is a reference host whose scripts are JSON lists of
//! emit calls.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_script::{ItemsRecorder, ScriptValue};
//!
//! let mut recorder = ItemsRecorder::new();
//! recorder
//!     .emit_points(&[
//!         ScriptValue::rgb(255, 0, 0),
//!         ScriptValue::pair(1.0, 2.0),
//!         ScriptValue::List(vec![ScriptValue::pair(3.0, 4.0), ScriptValue::pair(5.0, 6.0)]),
//!     ])
//!     .unwrap();
//! recorder
//!     .emit_segments(&[ScriptValue::pair(0.0, 0.0), ScriptValue::pair(1.0, 1.0)])
//!     .unwrap();
//!
//! // Colors are only accepted up front.
//! assert!(recorder.emit_points(&[ScriptValue::pair(0.0, 0.0), ScriptValue::rgb(0, 0, 0)]).is_err());
//!
//! let items = recorder.finish();
//! assert_eq!(items.points().len(), 3);
//! assert_eq!(items.segments().len(), 1);
//! ```

mod error;
mod file;
mod json;
mod recorder;
mod runner;
mod value;

pub use error::{ConversionError, ScriptError};
pub use file::ScriptFile;
pub use json::JsonScriptHost;
pub use recorder::{ItemsRecorder, ScriptHost, parse_emit_args};
pub use runner::{Publication, Published, RunOutcome, ScriptRunner};
pub use value::ScriptValue;
