// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

/// A viewport change that was refused.
///
/// Refusals are not fatal: the caller keeps the previous snapshot and is
/// expected to report the message to the user.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewError {
    /// The zoom factor must be finite and strictly positive.
    InvalidZoom(f64),
    /// The origin must have finite coordinates.
    NonFiniteOrigin,
    /// Fit bounds must satisfy `min < max` on both axes.
    DegenerateBounds {
        /// Requested X range.
        x: Range<f64>,
        /// Requested Y range.
        y: Range<f64>,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom(zoom) => {
                write!(f, "zoom factor must be greater than zero, got {zoom}")
            }
            Self::NonFiniteOrigin => f.write_str("camera origin must be a finite point"),
            Self::DegenerateBounds { x, y } => write!(
                f,
                "graph bounds need min < max on both axes, got x {}..{} and y {}..{}",
                x.start, x.end, y.start, y.end
            ),
        }
    }
}

impl core::error::Error for ViewError {}
