//! Province records derived from extracted shapes

use provmap_core::{DEFAULT_TERRAINS, Province, ProvinceList, Shape};

use crate::classify::classify;

/// Build the definition-table records for a list of shapes.
///
/// Ids are 1-based and follow shape order, so they are stable for a
/// given input image. The coastal flag, terrain and continent need
/// adjacency information this tool does not compute; they get the
/// neutral defaults the game accepts (`false`, `"unknown"`, `0`).
pub fn provinces_from_shapes(shapes: &[Shape]) -> ProvinceList {
    shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| Province {
            id: i as u32 + 1,
            unique_color: shape.unique_color(),
            kind: classify(shape.source_color()),
            coastal: false,
            terrain: DEFAULT_TERRAINS[0].to_string(),
            continent: 0,
        })
        .collect()
}
