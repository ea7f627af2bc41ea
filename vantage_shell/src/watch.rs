// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use vantage_script::{RunOutcome, ScriptError, ScriptFile, ScriptHost, ScriptRunner};

/// Re-runs a script whenever its file changes.
#[derive(Clone, Debug)]
pub struct ScriptWatcher {
    file: ScriptFile,
    runner: ScriptRunner,
}

impl ScriptWatcher {
    /// Watches `path`, publishing results through `runner`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, runner: ScriptRunner) -> Self {
        Self {
            file: ScriptFile::new(path),
            runner,
        }
    }

    /// The watched file.
    #[must_use]
    pub fn file(&self) -> &ScriptFile {
        &self.file
    }

    /// Runs the script on the calling thread if it changed since the last poll.
    pub fn poll<H: ScriptHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<Option<RunOutcome>, ScriptError> {
        let Some(source) = self.file.poll()? else {
            return Ok(None);
        };
        self.runner.run(host, &source).map(Some)
    }
}
