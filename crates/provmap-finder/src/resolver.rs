//! Pass 2 - root resolution and shape assembly
//!
//! Second raster scan. Every non-border pixel's provisional label is
//! replaced by the root of its equivalence class, and one shape per
//! distinct root is built incrementally: pixels accumulate in raster
//! order and the bounding box grows with them. Shapes appear in the
//! order their root is first encountered, which makes shape indices
//! (and therefore province ids) deterministic.

use std::collections::HashMap;

use provmap_core::{Color, ColorAssigner, Pixel, PixelGrid, Point, Shape, ShapeList};

use crate::equiv::EquivalenceSet;
use crate::error::{FinderError, FinderResult};
use crate::events::{CancelToken, EventSink, Stage};
use crate::grid::{Label, LabelGrid};

pub(crate) struct ResolveOutput {
    pub shapes: ShapeList,
    /// Root label of each shape, keyed back to its index in `shapes`.
    pub index: HashMap<Label, usize>,
}

pub(crate) fn resolve<G: PixelGrid>(
    grid: &G,
    labels: &mut LabelGrid,
    equiv: &EquivalenceSet,
    assigner: &mut dyn ColorAssigner,
    sink: &dyn EventSink,
    token: &CancelToken,
) -> FinderResult<ResolveOutput> {
    let width = grid.width();
    let height = grid.height();

    let mut shapes = ShapeList::new();
    let mut index: HashMap<Label, usize> = HashMap::new();

    for y in 0..height {
        if token.is_cancelled() {
            return Err(FinderError::Cancelled {
                stage: Stage::Resolving,
            });
        }

        for x in 0..width {
            let color = grid.color_at(x, y);
            if color == Color::BORDER {
                // Already recorded in the border buffer; the absorbing
                // pass assigns it.
                continue;
            }

            let root = equiv.resolve(labels.at(x, y));
            labels.set(x, y, root);

            let point = Point::new(x, y);
            let shape_index = *index.entry(root).or_insert_with(|| {
                let kind = assigner.classify(color);
                let unique_color = assigner.assign(kind);
                shapes.push(Shape::new(color, unique_color, point));
                shapes.len() - 1
            });

            shapes[shape_index].push(Pixel { point, color });
        }

        sink.progress(y + 1, height);
    }

    Ok(ResolveOutput { shapes, index })
}
