// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use vantage_items::GraphedItems;

use crate::error::ScriptError;
use crate::recorder::{ItemsRecorder, ScriptHost};

/// A published script result.
#[derive(Clone, Debug)]
pub struct Published {
    /// Generation of the run that produced the items.
    pub generation: u64,
    /// The run's frozen output.
    pub items: Arc<GraphedItems>,
}

#[derive(Debug, Default)]
struct Slot {
    latest: Option<Published>,
}

/// Hand-off point between script runs and the render loop.
///
/// Runs publish whole [`GraphedItems`] values; the render loop polls once per
/// tick and swaps in anything newer than what it holds. A result whose
/// generation is not newer than the current one is discarded.
#[derive(Clone, Debug, Default)]
pub struct Publication {
    slot: Arc<Mutex<Slot>>,
}

impl Publication {
    /// Creates an empty publication.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        // The slot only ever holds a complete value, so a poisoned lock is still usable.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publishes `items` for `generation`; returns `false` if a newer result is already there.
    pub fn publish(&self, generation: u64, items: Arc<GraphedItems>) -> bool {
        let mut slot = self.lock();
        if slot
            .latest
            .as_ref()
            .is_some_and(|current| current.generation >= generation)
        {
            tracing::debug!(generation, "discarding stale script result");
            return false;
        }
        slot.latest = Some(Published { generation, items });
        true
    }

    /// Returns the latest result if its generation is newer than `seen`.
    #[must_use]
    pub fn newer_than(&self, seen: u64) -> Option<Published> {
        self.lock()
            .latest
            .as_ref()
            .filter(|p| p.generation > seen)
            .cloned()
    }
}

/// Summary of a successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Generation the run was stamped with.
    pub generation: u64,
    /// Whether the result was published (it was not stale).
    pub published: bool,
    /// Number of points produced.
    pub points: usize,
    /// Number of segments produced.
    pub segments: usize,
}

/// Runs scripts and publishes their results in generation order.
///
/// Generations are handed out when a run starts, so a slow run that finishes
/// after a newer one cannot replace the newer result.
#[derive(Clone, Debug, Default)]
pub struct ScriptRunner {
    next_generation: Arc<AtomicU64>,
    publication: Publication,
}

impl ScriptRunner {
    /// Creates a runner publishing into `publication`.
    #[must_use]
    pub fn new(publication: Publication) -> Self {
        Self {
            next_generation: Arc::new(AtomicU64::new(0)),
            publication,
        }
    }

    /// The publication this runner feeds.
    #[must_use]
    pub fn publication(&self) -> &Publication {
        &self.publication
    }

    /// Reserves the generation for a new run.
    pub fn begin(&self) -> u64 {
        self.next_generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Runs `source` on the calling thread under a fresh generation.
    pub fn run<H: ScriptHost + ?Sized>(
        &self,
        host: &mut H,
        source: &str,
    ) -> Result<RunOutcome, ScriptError> {
        let generation = self.begin();
        self.run_as(generation, host, source)
    }

    /// Runs `source` under a generation obtained from [`ScriptRunner::begin`].
    ///
    /// On failure nothing is published and the previous result stays current.
    pub fn run_as<H: ScriptHost + ?Sized>(
        &self,
        generation: u64,
        host: &mut H,
        source: &str,
    ) -> Result<RunOutcome, ScriptError> {
        let mut recorder = ItemsRecorder::new();
        if let Err(err) = host.run(source, &mut recorder) {
            tracing::warn!(generation, error = %err, "script run failed");
            return Err(err);
        }
        let items = Arc::new(recorder.finish());
        let outcome = RunOutcome {
            generation,
            published: false,
            points: items.points().len(),
            segments: items.segments().len(),
        };
        let published = self.publication.publish(generation, items);
        tracing::info!(
            generation,
            points = outcome.points,
            segments = outcome.segments,
            published,
            "script run finished"
        );
        Ok(RunOutcome {
            published,
            ..outcome
        })
    }

    /// Runs `source` on a background thread under a fresh generation.
    pub fn spawn<H>(&self, mut host: H, source: String) -> JoinHandle<Result<RunOutcome, ScriptError>>
    where
        H: ScriptHost + Send + 'static,
    {
        let generation = self.begin();
        let runner = self.clone();
        thread::spawn(move || runner.run_as(generation, &mut host, &source))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vantage_items::GraphedItems;

    use super::{Publication, ScriptRunner};
    use crate::json::JsonScriptHost;

    const ONE_POINT: &str = r#"[{ "emit": "points", "args": [[1, 1]] }]"#;
    const TWO_POINTS: &str = r#"[{ "emit": "points", "args": [[1, 1], [2, 2]] }]"#;

    #[test]
    fn publication_only_moves_forward() {
        let publication = Publication::new();
        assert!(publication.newer_than(0).is_none());

        assert!(publication.publish(2, Arc::new(GraphedItems::empty())));
        assert!(!publication.publish(1, Arc::new(GraphedItems::empty())));
        assert!(!publication.publish(2, Arc::new(GraphedItems::empty())));

        assert_eq!(publication.newer_than(0).map(|p| p.generation), Some(2));
        assert!(publication.newer_than(2).is_none());
    }

    #[test]
    fn stale_run_cannot_overwrite_newer_result() {
        let runner = ScriptRunner::new(Publication::new());
        let older = runner.begin();
        let newer = runner.begin();

        let first = runner.run_as(newer, &mut JsonScriptHost, TWO_POINTS).unwrap();
        assert!(first.published);
        let late = runner.run_as(older, &mut JsonScriptHost, ONE_POINT).unwrap();
        assert!(!late.published);

        let latest = runner.publication().newer_than(0).unwrap();
        assert_eq!(latest.generation, newer);
        assert_eq!(latest.items.points().len(), 2);
    }

    #[test]
    fn failed_run_keeps_previous_result() {
        let runner = ScriptRunner::new(Publication::new());
        let ok = runner.run(&mut JsonScriptHost, ONE_POINT).unwrap();
        assert!(runner.run(&mut JsonScriptHost, "not json").is_err());

        let latest = runner.publication().newer_than(0).unwrap();
        assert_eq!(latest.generation, ok.generation);
    }

    #[test]
    fn background_runs_publish() {
        let runner = ScriptRunner::new(Publication::new());
        let handle = runner.spawn(JsonScriptHost, TWO_POINTS.to_owned());
        let outcome = handle.join().unwrap().unwrap();
        assert!(outcome.published);
        assert_eq!(outcome.points, 2);
        assert!(runner.publication().newer_than(0).is_some());
    }
}
