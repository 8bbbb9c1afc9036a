//! Error types for waterfall measurement.

use std::fmt;

/// Failures surfaced by configuration validation and measurement passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The configuration cannot produce a valid layout (zero columns,
    /// negative spacing or insets, or a container too narrow to leave the
    /// items any width). Reported before any layout work happens.
    InvalidConfiguration { reason: &'static str },
    /// The height provider had no answer for an index the pass required.
    /// The pass is aborted before touching any state; treat this as a
    /// data-source bug, not a retryable condition.
    MissingHeight { index: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidConfiguration { reason } => {
                write!(f, "invalid layout configuration: {reason}")
            }
            LayoutError::MissingHeight { index } => {
                write!(f, "no height available for item {index}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
