//! Post-pass shape validation
//!
//! Advisory only: findings are reported as warnings and the shape list
//! is returned regardless.

use provmap_core::Shape;

use crate::events::{EventSink, Warning};

/// The minimum number of pixels in a valid province.
pub const MIN_SHAPE_SIZE: usize = 8;

/// Check every shape against the game's province rules.
///
/// - a province needs more than [`MIN_SHAPE_SIZE`] pixels
/// - a province's bounding box must fit within one eighth of the map
///   in each dimension, or the renderer draws it wrongly near the map
///   wrap
///
/// Warning indices are 1-based to match province ids.
pub(crate) fn validate(width: u32, height: u32, shapes: &[Shape], sink: &dyn EventSink) {
    for (i, shape) in shapes.iter().enumerate() {
        let index = i + 1;

        if shape.pixel_count() <= MIN_SHAPE_SIZE {
            sink.warn(&Warning::UndersizedShape {
                index,
                pixels: shape.pixel_count(),
            });
        }

        let (box_width, box_height) = shape.bounding_box().dims();
        if u64::from(box_width) * 8 > u64::from(width)
            || u64::from(box_height) * 8 > u64::from(height)
        {
            sink.warn(&Warning::OversizedShape {
                index,
                width: box_width,
                height: box_height,
                image_width: width,
                image_height: height,
            });
        }
    }
}
