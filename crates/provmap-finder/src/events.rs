//! Run observation: stages, warnings, cancellation, stage dumps

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use provmap_core::{Color, Point};

use crate::error::FinderError;
use crate::grid::{Label, LabelGrid};
use crate::validator::MIN_SHAPE_SIZE;

/// The pipeline stage a run is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Scanning,
    Resolving,
    Absorbing,
    Validating,
    Done,
}

impl Stage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scanning => "scanning",
            Self::Resolving => "resolving",
            Self::Absorbing => "absorbing",
            Self::Validating => "validating",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Advisory findings; the run always continues past them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A neighbor pixel had a different non-border color than the
    /// pixel being scanned. The neighbor was treated as border.
    MixedColorNeighborhood {
        at: Point,
        expected: Color,
        found: Color,
    },
    /// A shape with too few pixels to be a valid province.
    UndersizedShape { index: usize, pixels: usize },
    /// A shape whose bounding box exceeds one eighth of the map in
    /// some dimension.
    OversizedShape {
        index: usize,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
}

impl Warning {
    /// Stable identifier for log filtering.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MixedColorNeighborhood { .. } => "mixed-color-neighborhood",
            Self::UndersizedShape { .. } => "undersized-shape",
            Self::OversizedShape { .. } => "oversized-bounding-box",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MixedColorNeighborhood {
                at,
                expected,
                found,
            } => write!(
                f,
                "multiple colors found in shape: pixel at {at} is {found}, expected {expected}"
            ),
            Self::UndersizedShape { index, pixels } => write!(
                f,
                "shape {index} has only {pixels} pixels; provinces need more than {MIN_SHAPE_SIZE}"
            ),
            Self::OversizedShape {
                index,
                width,
                height,
                image_width,
                image_height,
            } => write!(
                f,
                "shape {index} has a bounding box of {width}x{height}; \
                 provinces must fit within one eighth of the {image_width}x{image_height} map"
            ),
        }
    }
}

/// Receives engine events.
///
/// Every method has a no-op default, so sinks implement only what they
/// care about. Callbacks are invoked synchronously from the engine's
/// thread and must not block; a sink that feeds a UI owns the
/// marshalling.
pub trait EventSink {
    /// The run entered a new stage.
    fn stage(&self, _stage: Stage) {}

    /// A raster pass finished row `row` of `total`.
    fn progress(&self, _row: u32, _total: u32) {}

    /// An advisory finding; the run continues.
    fn warn(&self, _warning: &Warning) {}

    /// A fatal condition; the run stops after this.
    fn error(&self, _error: &FinderError) {}

    /// A pixel received a label (high volume; scanning pass only).
    fn debug_pixel(&self, _label: Label, _point: Point) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {}

/// Forwards events to `tracing`: stages at info, progress and pixel
/// traces at trace, warnings at warn, fatal conditions at error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn stage(&self, stage: Stage) {
        tracing::info!(stage = stage.name(), "pipeline stage");
    }

    fn progress(&self, row: u32, total: u32) {
        tracing::trace!(row, total, "finished row");
    }

    fn warn(&self, warning: &Warning) {
        tracing::warn!(code = warning.code(), "{warning}");
    }

    fn error(&self, error: &FinderError) {
        tracing::error!(code = error.code(), "{error}");
    }

    fn debug_pixel(&self, label: Label, point: Point) {
        tracing::trace!(label, %point, "assigned label");
    }
}

/// Observes the label grid at pass boundaries.
///
/// Separate from [`EventSink`] because a dump borrows the whole grid
/// and is expected to do real work (writing a debug bitmap), which the
/// sink contract forbids.
pub trait StageDump {
    /// The provisional label grid, right after the scanning pass.
    fn scanned(&mut self, _labels: &LabelGrid) {}

    /// The resolved label grid, right after the resolving pass.
    fn resolved(&mut self, _labels: &LabelGrid) {}
}

/// Cooperative stop switch shared between the engine and its caller.
///
/// Cancellation is one-way: once set it stays set, and the engine
/// abandons work at the next row boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the run to stop. Irrevocable.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_one_way() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());

        token.cancel();
        assert!(token.is_cancelled());

        // Clones observe the shared flag.
        let clone = token.clone();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_clone_shares_the_flag() {
        let token = CancelToken::new();
        let clone = token.clone();

        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_warning_codes() {
        let warning = Warning::UndersizedShape {
            index: 3,
            pixels: 4,
        };
        assert_eq!(warning.code(), "undersized-shape");
        assert!(warning.to_string().contains("shape 3"));
    }
}
