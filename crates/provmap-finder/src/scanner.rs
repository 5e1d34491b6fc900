//! Pass 1 - provisional labeling
//!
//! Raster-scans the image left to right, top to bottom. Each
//! non-border pixel gets a label derived from the two already-visited
//! neighbors (left and up, 4-connectivity): a fresh label when neither
//! matches, the neighbor's label when one does, and the smaller of the
//! two when both do, recording the equivalence so the resolving pass
//! can reconcile them. Border pixels keep label 0 and are collected
//! for the absorbing pass.

use provmap_core::{Color, Pixel, PixelGrid, Point};

use crate::equiv::EquivalenceSet;
use crate::error::{FinderError, FinderResult};
use crate::events::{CancelToken, EventSink, Stage, Warning};
use crate::grid::{Label, LabelGrid};

/// Everything the scanning pass hands to the later passes.
pub(crate) struct ScanOutput {
    pub labels: LabelGrid,
    pub equiv: EquivalenceSet,
    /// Border pixel positions, in raster order.
    pub border: Vec<Point>,
    /// Pixels demoted to border because of a mixed-color neighborhood.
    pub problematic: Vec<Pixel>,
}

pub(crate) fn scan<G: PixelGrid>(
    grid: &G,
    sink: &dyn EventSink,
    token: &CancelToken,
) -> FinderResult<ScanOutput> {
    let width = grid.width();
    let height = grid.height();

    let mut labels = LabelGrid::new(width, height);
    let mut equiv = EquivalenceSet::new();
    let mut border = Vec::new();
    let mut problematic = Vec::new();

    for y in 0..height {
        if token.is_cancelled() {
            return Err(FinderError::Cancelled {
                stage: Stage::Scanning,
            });
        }

        for x in 0..width {
            let color = grid.color_at(x, y);
            let point = Point::new(x, y);

            if color == Color::BORDER {
                border.push(point);
                continue;
            }

            let left = (x > 0)
                .then(|| matching_neighbor(grid, &labels, x - 1, y, color, sink, &mut problematic))
                .flatten();
            let up = (y > 0)
                .then(|| matching_neighbor(grid, &labels, x, y - 1, color, sink, &mut problematic))
                .flatten();

            let label = match (left, up) {
                (None, None) => equiv.allocate(),
                (Some(label), None) | (None, Some(label)) => label,
                (Some(a), Some(b)) if a == b => a,
                (Some(a), Some(b)) => {
                    equiv.merge(a, b);
                    a.min(b)
                }
            };

            labels.set(x, y, label);
            sink.debug_pixel(label, point);
        }

        sink.progress(y + 1, height);
    }

    Ok(ScanOutput {
        labels,
        equiv,
        border,
        problematic,
    })
}

/// The neighbor's label, if its color matches the current pixel.
///
/// A border-colored neighbor simply does not count. A neighbor with a
/// *different* non-border color is a drawing mistake: it is reported,
/// remembered as problematic, and treated as border.
fn matching_neighbor<G: PixelGrid>(
    grid: &G,
    labels: &LabelGrid,
    x: u32,
    y: u32,
    expected: Color,
    sink: &dyn EventSink,
    problematic: &mut Vec<Pixel>,
) -> Option<Label> {
    let found = grid.color_at(x, y);
    if found == expected {
        return Some(labels.at(x, y));
    }

    if found != Color::BORDER {
        let at = Point::new(x, y);
        sink.warn(&Warning::MixedColorNeighborhood {
            at,
            expected,
            found,
        });
        problematic.push(Pixel { point: at, color: found });
    }
    None
}
