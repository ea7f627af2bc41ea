// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use kurbo::Point;
use vantage_camera::{Camera, Frame, ViewError};
use vantage_items::GraphedItems;
use vantage_script::{Publication, ScriptError};

use crate::input::{DragState, InputEvent, pan_for_drag};
use crate::notify::{Notifications, Severity};

/// One interactive graph view: camera, adopted content and user log.
///
/// A host drives the session with [`Session::tick`], once per display frame.
/// Script runs publish into the session's [`Publication`]; each tick adopts
/// at most the newest result.
#[derive(Debug)]
pub struct Session {
    camera: Camera,
    items: Arc<GraphedItems>,
    publication: Publication,
    adopted_generation: u64,
    drag: DragState,
    notifications: Notifications,
}

impl Session {
    /// Creates a session with a `width` by `height` canvas.
    #[must_use]
    pub fn new(width: u16, height: u16, publication: Publication) -> Self {
        Self {
            camera: Camera::new(width, height),
            items: Arc::new(GraphedItems::empty()),
            publication,
            adopted_generation: 0,
            drag: DragState::default(),
            notifications: Notifications::default(),
        }
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The content currently shown.
    #[must_use]
    pub fn items(&self) -> &Arc<GraphedItems> {
        &self.items
    }

    /// Generation of the content currently shown; `0` before any adoption.
    #[must_use]
    pub fn adopted_generation(&self) -> u64 {
        self.adopted_generation
    }

    /// The user-visible log.
    #[must_use]
    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Mutable access to the user-visible log.
    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Graph-space corners of the visible region, for numeric UI fields.
    #[must_use]
    pub fn graph_bounds(&self) -> (Point, Point) {
        (
            self.camera.minimum_graph_bounds(),
            self.camera.maximum_graph_bounds(),
        )
    }

    /// The most recent frame.
    #[must_use]
    pub fn frame(&self) -> Option<Frame<'_>> {
        self.camera.last_frame()
    }

    /// Applies one input event to the camera.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::DragStart(pos) => self.drag.start(pos),
            InputEvent::DragMove(pos) => {
                if let Some(delta) = self.drag.update(pos) {
                    let pan = pan_for_drag(delta);
                    self.camera.move_by_pixel_amount(pan.x, pan.y);
                }
            }
            InputEvent::DragEnd => self.drag.end(),
            InputEvent::Scroll { dx, dy } => {
                self.camera.change_field_of_view(whole_pixels(dx), whole_pixels(dy));
            }
            InputEvent::SetOrigin(origin) => {
                let result = self.camera.set_origin(origin);
                self.report_refusal(result);
            }
            InputEvent::SetZoomFactor(zoom) => {
                let result = self.camera.set_zoom_factor(zoom);
                self.report_refusal(result);
            }
            InputEvent::SetGraphBounds { x, y } => {
                let result = self.camera.set_graph_bounds(x, y);
                self.report_refusal(result);
            }
            InputEvent::ResetCamera => self.reset_camera(),
            InputEvent::ResetFieldOfView => {
                self.camera.reset_field_of_view();
            }
        }
    }

    /// Fits the camera to the current content.
    ///
    /// Empty content resets the view, a single point centers on it, anything
    /// else is fitted to its bounds truncated to whole units.
    pub fn reset_camera(&mut self) {
        let result = self.camera.fit_to_content(self.items.bounds());
        self.report_refusal(result);
    }

    /// Adopts the newest published content, if any. Returns `true` on adoption.
    pub fn adopt_published(&mut self) -> bool {
        let Some(published) = self.publication.newer_than(self.adopted_generation) else {
            return false;
        };
        tracing::debug!(generation = published.generation, "adopting script result");
        self.adopted_generation = published.generation;
        self.items = published.items;
        true
    }

    /// Runs one render-loop tick.
    ///
    /// Adopts newer content, applies `events`, and re-renders when the camera
    /// moved, the content changed or no frame exists yet. Returns `true` if a
    /// frame was rendered.
    pub fn tick(&mut self, events: impl IntoIterator<Item = InputEvent>) -> bool {
        self.adopt_published();
        for event in events {
            self.apply(event);
        }

        // Consumed every tick so one change causes exactly one render.
        let content_changed = self.items.take_changed();
        if !(content_changed || self.camera.has_moved() || self.camera.last_frame().is_none()) {
            return false;
        }
        self.camera.render_items(&self.items);
        true
    }

    /// Reports a failed script run; the current content stays in effect.
    pub fn report_script_error(&mut self, err: &ScriptError) {
        self.notifications.push_error(Severity::Error, err);
    }

    fn report_refusal(&mut self, result: Result<bool, ViewError>) {
        if let Err(err) = result {
            self.notifications.push_error(Severity::Warning, &err);
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "scroll deltas are small; `as` saturates and maps NaN to zero"
)]
fn whole_pixels(delta: f64) -> i32 {
    delta.round() as i32
}
