//! Error types for the ADI solver.

use crate::solver::PhaseKind;
use thiserror::Error;

/// Result type alias using the crate's Error
pub type Result<T> = std::result::Result<T, AdiError>;

/// Errors that can occur while configuring or running the solver.
#[derive(Error, Debug)]
pub enum AdiError {
    /// Invalid problem setup, raised before any sweep runs.
    #[error("Configuration error: {reason}")]
    Configuration {
        /// What was wrong
        reason: String,
    },

    /// A Thomas elimination pivot vanished or left the finite range.
    #[error(
        "Numerical error: singular pivot {pivot} in {phase} sweep, line {line}, index {index}"
    )]
    Numerical {
        /// Sweep that failed
        phase: PhaseKind,
        /// Outer axis line index
        line: usize,
        /// Position along the line
        index: usize,
        /// Offending value of `lo * P[j-1] + diag`
        pivot: f64,
    },

    /// Writing solver output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a heat map failed.
    #[error("Image error: {0}")]
    Image(#[from] ::image::ImageError),
}

impl AdiError {
    /// Shorthand for [`AdiError::Configuration`].
    pub fn configuration<S: Into<String>>(reason: S) -> Self {
        AdiError::Configuration {
            reason: reason.into(),
        }
    }

    /// True for errors raised by the elimination itself.
    pub fn is_numerical(&self) -> bool {
        matches!(self, AdiError::Numerical { .. })
    }
}
