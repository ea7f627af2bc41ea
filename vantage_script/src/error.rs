// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use crate::value::ScriptValue;

/// An emit argument that is not a point, a sequence of points, or a leading color.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("cannot convert {value} to a point")]
pub struct ConversionError {
    /// The offending value.
    pub value: ScriptValue,
}

impl ConversionError {
    pub(crate) fn new(value: ScriptValue) -> Self {
        Self { value }
    }
}

/// Why a script run produced no items.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// An emit call received malformed point data.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// The script failed to parse or raised an error while running.
    #[error("script error: {message}")]
    Execution {
        /// Short description for the user.
        message: String,
        /// The host's original failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The script file could not be read.
    #[error("cannot read script {}", path.display())]
    Io {
        /// Path of the script file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl ScriptError {
    /// Wraps a host failure.
    pub fn execution(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Execution {
            message: message.into(),
            source: source.into(),
        }
    }
}
