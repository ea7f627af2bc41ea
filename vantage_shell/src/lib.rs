// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Shell: the render-loop driver around the graph camera.
//!
//! A [`Session`] owns a [`Camera`](vantage_camera::Camera), the content it
//! currently shows and a user-visible [`Notifications`] log. Each
//! [`Session::tick`]:
//!
//! 1. adopts the newest result published by a script run, if any;
//! 2. applies pending [`InputEvent`]s (drag pans, scroll changes the
//!    per-axis density, numeric edits set origin, zoom or bounds);
//! 3. re-renders only when the camera moved, the content changed, or no
//!    frame exists yet.
//!
//! Refused camera changes and failed script runs become one notice each; they
//! never interrupt the loop.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_script::{JsonScriptHost, Publication, ScriptRunner};
//! use vantage_shell::{InputEvent, Session};
//!
//! let publication = Publication::new();
//! let runner = ScriptRunner::new(publication.clone());
//! let mut session = Session::new(400, 300, publication);
//!
//! runner
//!     .run(&mut JsonScriptHost, r#"[{ "emit": "points", "args": [[1, 1], [3, 2]] }]"#)
//!     .unwrap();
//!
//! // The script result is adopted before the reset fits the camera to it.
//! assert!(session.tick([InputEvent::ResetCamera]));
//! assert_eq!(session.items().points().len(), 2);
//! assert_eq!(session.camera().origin().x, 2.0);
//!
//! // A refused edit is reported, not applied.
//! session.tick([InputEvent::SetZoomFactor(0.0)]);
//! assert_eq!(session.notifications().len(), 1);
//! assert_eq!(session.camera().zoom_factor(), 1.0);
//! ```

mod input;
mod notify;
mod session;
mod watch;

pub use input::{DragState, InputEvent, pan_for_drag};
pub use notify::{DEFAULT_NOTICE_CAPACITY, Notice, Notifications, Severity};
pub use session::Session;
pub use watch::ScriptWatcher;
