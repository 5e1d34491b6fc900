//! Error types for provmap-finder

use provmap_core::Point;
use thiserror::Error;

use crate::events::Stage;

/// Fatal conditions that abort a run.
///
/// Warnings never surface here; they go through
/// [`EventSink::warn`](crate::EventSink::warn) and the run continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinderError {
    /// A border pixel had no shape to join: the image contains no
    /// usable province pixels.
    #[error("no province pixels found from {at}; check that the input image is not border color only")]
    BorderOnly { at: Point },

    /// The cancel token was set; the run stopped at a row boundary.
    #[error("cancelled during the {stage} stage")]
    Cancelled { stage: Stage },
}

impl FinderError {
    /// Stable identifier for log filtering.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BorderOnly { .. } => "border-only",
            Self::Cancelled { .. } => "cancelled",
        }
    }
}

/// Result type for finder operations
pub type FinderResult<T> = Result<T, FinderError>;
