//! Pass 3 - border absorption
//!
//! The game's format has no concept of an unlabeled pixel: every pixel
//! must belong to exactly one province. This pass walks the border
//! pixels collected during scanning and merges each one into an
//! adjacent shape. The border is one pixel wide along any interface,
//! so joining *a* neighbor is always valid.
//!
//! Adoption order is fixed: the left neighbor, then the upper, then
//! the first labeled pixel found scanning forward in raster order.
//! Neighbors are judged by the label grid, which this pass updates as
//! it goes: a border pixel absorbed earlier in the walk counts as
//! owned, which is what lets an outer border ring chain onto the
//! shape it encloses row by row. The order is deliberately asymmetric
//! (borders tend to join the shape on their left) and is part of
//! the observable contract.

use std::collections::HashMap;

use provmap_core::{Color, Pixel, Point, ShapeList};

use crate::error::{FinderError, FinderResult};
use crate::events::{CancelToken, Stage};
use crate::grid::{Label, LabelGrid};

pub(crate) fn absorb(
    labels: &mut LabelGrid,
    shapes: &mut ShapeList,
    index: &HashMap<Label, usize>,
    border: &[Point],
    token: &CancelToken,
) -> FinderResult<()> {
    let mut current_row = None;

    for &point in border {
        // The buffer is in raster order, so a row change here is a row
        // boundary in the image.
        if current_row != Some(point.y) {
            if token.is_cancelled() {
                return Err(FinderError::Cancelled {
                    stage: Stage::Absorbing,
                });
            }
            current_row = Some(point.y);
        }

        let Some(label) = adoption_label(labels, point) else {
            return Err(FinderError::BorderOnly { at: point });
        };

        let shape = &mut shapes[index[&label]];
        shape.push(Pixel {
            point,
            color: Color::BORDER,
        });
        labels.set(point.x, point.y, label);
    }

    Ok(())
}

/// The root label of the shape this border pixel joins.
///
/// Everything behind the walk is already labeled (non-border pixels by
/// the resolving pass, border pixels by this one), so the left and up
/// checks only miss at the image edge. The forward scan can therefore
/// only trigger at the top-left corner, where it deterministically
/// picks the first labeled pixel; everything ahead that is still 0 is
/// an unabsorbed border pixel and is skipped.
fn adoption_label(labels: &LabelGrid, point: Point) -> Option<Label> {
    let Point { x, y } = point;

    if x > 0 {
        let left = labels.at(x - 1, y);
        if left != 0 {
            return Some(left);
        }
    }
    if y > 0 {
        let up = labels.at(x, y - 1);
        if up != 0 {
            return Some(up);
        }
    }

    let width = labels.width();
    let height = labels.height();
    for sy in y..height {
        let x_start = if sy == y { x } else { 0 };
        for sx in x_start..width {
            let label = labels.at(sx, sy);
            if label != 0 {
                return Some(label);
            }
        }
    }

    None
}
