// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::VecDeque;
use std::error::Error;
use std::fmt::Write as _;

/// Default number of notices kept by [`Notifications::default`].
pub const DEFAULT_NOTICE_CAPACITY: usize = 64;

/// How serious a notice is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational.
    Info,
    /// A request was refused; nothing changed.
    Warning,
    /// Something failed; previous state stays in effect.
    Error,
}

/// One user-visible message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Severity of the message.
    pub severity: Severity,
    /// Text shown to the user.
    pub message: String,
}

/// The user-visible log.
///
/// Keeps the most recent notices, oldest first. Every notice is also emitted
/// through `tracing` at the matching level.
#[derive(Clone, Debug)]
pub struct Notifications {
    entries: VecDeque<Notice>,
    capacity: usize,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_NOTICE_CAPACITY)
    }
}

impl Notifications {
    /// Creates a log that keeps at most `capacity` notices (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a notice.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Info => tracing::info!(target: "vantage::notice", "{message}"),
            Severity::Warning => tracing::warn!(target: "vantage::notice", "{message}"),
            Severity::Error => tracing::error!(target: "vantage::notice", "{message}"),
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Notice { severity, message });
    }

    /// Records `err` and its source chain as one notice.
    pub fn push_error(&mut self, severity: Severity, err: &dyn Error) {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let _ = write!(message, ": {cause}");
            source = cause.source();
        }
        self.push(severity, message);
    }

    /// Notices currently held, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> + '_ {
        self.entries.iter()
    }

    /// The most recent notice.
    #[must_use]
    pub fn latest(&self) -> Option<&Notice> {
        self.entries.back()
    }

    /// Number of notices held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no notices are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns all notices, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.entries.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Notifications, Severity};

    #[derive(Debug, thiserror::Error)]
    #[error("outer")]
    struct Outer(#[source] Inner);

    #[derive(Debug, thiserror::Error)]
    #[error("inner")]
    struct Inner;

    #[test]
    fn oldest_entries_are_dropped_at_capacity() {
        let mut log = Notifications::with_capacity(2);
        log.push(Severity::Info, "one");
        log.push(Severity::Warning, "two");
        log.push(Severity::Error, "three");

        let messages: Vec<_> = log.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["two", "three"]);
        assert_eq!(log.latest().map(|n| n.severity), Some(Severity::Error));
    }

    #[test]
    fn error_chain_is_one_notice() {
        let mut log = Notifications::default();
        log.push_error(Severity::Error, &Outer(Inner));
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest().unwrap().message, "outer: inner");
    }

    #[test]
    fn drain_empties() {
        let mut log = Notifications::default();
        log.push(Severity::Info, "hello");
        assert_eq!(log.drain().len(), 1);
        assert!(log.is_empty());
    }
}
