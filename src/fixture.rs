//! Hand-specified map fixture for exercising downstream simulation stages
//! without depending on randomized placement.

use crate::{
    config::MapConfig,
    generator::{MapGenerator, ResearchMap},
    geometry::{Building, BuildingKind, GeometryError},
};

fn house(id: u32, x: u32, y: u32, width: u32, height: u32) -> Building {
    Building {
        id,
        x,
        y,
        kind: BuildingKind::House,
        width,
        height,
    }
}

/// Build a map from the fixed 500x500 dummy configuration, then swap the
/// building list for four literal records. Population still comes from the
/// normal randomized path; the literal buildings are trusted as-is and get
/// no collision check.
pub fn dummy_map() -> Result<ResearchMap, GeometryError> {
    let mut map = MapGenerator::new(MapConfig::dummy())?.generate();
    map.buildings = vec![
        house(1, 108, 228, 72, 114),
        house(2, 76, 288, 72, 76),
        house(3, 396, 228, 108, 114),
        house(4, 288, 418, 72, 76),
    ];
    Ok(map)
}
