// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::ScriptError;

/// A script on disk, watched by polling its modification time.
#[derive(Clone, Debug)]
pub struct ScriptFile {
    path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl ScriptFile {
    /// Watches `path`; the first poll always reports the file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_modified: None,
        }
    }

    /// Path of the watched script.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the script unconditionally.
    pub fn read(&self) -> Result<String, ScriptError> {
        fs::read_to_string(&self.path).map_err(|source| ScriptError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Returns the script source if the file changed since the last poll.
    pub fn poll(&mut self) -> Result<Option<String>, ScriptError> {
        let modified = fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .map_err(|source| ScriptError::Io {
                path: self.path.clone(),
                source,
            })?;
        if self.last_modified == Some(modified) {
            return Ok(None);
        }
        let source = self.read()?;
        tracing::debug!(path = %self.path.display(), "script changed");
        self.last_modified = Some(modified);
        Ok(Some(source))
    }
}
