//! Geometry primitives: placed records, random construction, overlap test.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("derived maximum wall length {max} is below the minimum {min}")]
    WallRange { min: u32, max: u32 },
    #[error("canvas {length}x{width} cannot fit a {max_wall} wall inside an indent of {indent}")]
    CanvasTooSmall {
        length: u32,
        width: u32,
        indent: u32,
        max_wall: u32,
    },
}

/// Shared placement bounds, fixed once before generation starts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeometryLimits {
    pub borders_indent: u32,
    pub min_wall_len: u32,
    pub max_wall_len: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingKind {
    House,
}

/// A placed structure. Position is the footprint centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    pub kind: BuildingKind,
    pub width: u32,
    pub height: u32,
}

impl Building {
    /// True if the footprints of two buildings overlap. Touching edges do
    /// not count as overlap. Symmetric in its arguments.
    pub fn intersects(&self, other: &Building) -> bool {
        self.x.abs_diff(other.x) * 2 < self.width + other.width
            && self.y.abs_diff(other.y) * 2 < self.height + other.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Susceptible,
    Infected,
    Recovered,
}

/// A single simulated agent. The health field belongs to the downstream
/// infection model; generation always starts agents susceptible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationUnit {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    pub health: HealthStatus,
}

/// Randomly parameterizes buildings and population units on a fixed canvas.
///
/// Construction validates that the largest allowed building fits inside the
/// border indent, so the per-record constructors never fail.
#[derive(Debug, Clone)]
pub struct GeometryFactory {
    limits: GeometryLimits,
    canvas_length: u32,
    canvas_width: u32,
}

impl GeometryFactory {
    pub fn new(
        limits: GeometryLimits,
        canvas_length: u32,
        canvas_width: u32,
    ) -> Result<Self, GeometryError> {
        if limits.max_wall_len < limits.min_wall_len {
            return Err(GeometryError::WallRange {
                min: limits.min_wall_len,
                max: limits.max_wall_len,
            });
        }
        let needed = 2 * (limits.borders_indent + half_extent(limits.max_wall_len));
        if canvas_length < needed || canvas_width < needed {
            return Err(GeometryError::CanvasTooSmall {
                length: canvas_length,
                width: canvas_width,
                indent: limits.borders_indent,
                max_wall: limits.max_wall_len,
            });
        }
        Ok(Self {
            limits,
            canvas_length,
            canvas_width,
        })
    }

    pub fn limits(&self) -> GeometryLimits {
        self.limits
    }

    /// Construct a randomly placed building with the given identity.
    pub fn new_building(&self, id: u32, rng: &mut impl Rng) -> Building {
        let width = rng.gen_range(self.limits.min_wall_len..=self.limits.max_wall_len);
        let height = rng.gen_range(self.limits.min_wall_len..=self.limits.max_wall_len);
        let indent = self.limits.borders_indent;
        let x = rng.gen_range(
            indent + half_extent(width)..=self.canvas_length - indent - half_extent(width),
        );
        let y = rng.gen_range(
            indent + half_extent(height)..=self.canvas_width - indent - half_extent(height),
        );
        Building {
            id,
            x,
            y,
            kind: BuildingKind::House,
            width,
            height,
        }
    }

    /// Construct a randomly placed population unit with the given identity.
    pub fn new_population_unit(&self, id: u32, rng: &mut impl Rng) -> PopulationUnit {
        let indent = self.limits.borders_indent;
        let x = rng.gen_range(indent..=self.canvas_length - indent);
        let y = rng.gen_range(indent..=self.canvas_width - indent);
        PopulationUnit {
            id,
            x,
            y,
            health: HealthStatus::Susceptible,
        }
    }
}

fn half_extent(extent: u32) -> u32 {
    (extent + 1) / 2
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

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

    #[test]
    fn overlapping_footprints_intersect() {
        let a = house(0, 100, 100, 40, 40);
        let b = house(1, 120, 110, 40, 40);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn distant_footprints_do_not_intersect() {
        let a = house(0, 100, 100, 40, 40);
        let b = house(1, 300, 100, 40, 40);

        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        // Centres 40 apart, widths 40 each: shared edge, no overlap.
        let a = house(0, 100, 100, 40, 40);
        let b = house(1, 140, 100, 40, 40);

        assert!(!a.intersects(&b));
    }

    #[test]
    fn buildings_stay_inside_the_indent() {
        let limits = GeometryLimits {
            borders_indent: 10,
            min_wall_len: 20,
            max_wall_len: 60,
        };
        let factory = GeometryFactory::new(limits, 400, 300).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for id in 0..200 {
            let b = factory.new_building(id, &mut rng);
            let half_w = (b.width + 1) / 2;
            let half_h = (b.height + 1) / 2;
            assert!(b.x - half_w >= 10 && b.x + half_w <= 390);
            assert!(b.y - half_h >= 10 && b.y + half_h <= 290);
            assert!((20..=60).contains(&b.width));
            assert!((20..=60).contains(&b.height));
        }
    }

    #[test]
    fn population_units_stay_inside_the_indent() {
        let limits = GeometryLimits {
            borders_indent: 10,
            min_wall_len: 20,
            max_wall_len: 60,
        };
        let factory = GeometryFactory::new(limits, 400, 300).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        for id in 0..200 {
            let unit = factory.new_population_unit(id, &mut rng);
            assert!((10..=390).contains(&unit.x));
            assert!((10..=290).contains(&unit.y));
            assert_eq!(unit.health, HealthStatus::Susceptible);
        }
    }

    #[test]
    fn inverted_wall_range_is_rejected() {
        let limits = GeometryLimits {
            borders_indent: 4,
            min_wall_len: 80,
            max_wall_len: 60,
        };

        assert!(matches!(
            GeometryFactory::new(limits, 400, 400),
            Err(GeometryError::WallRange { min: 80, max: 60 })
        ));
    }

    #[test]
    fn cramped_canvas_is_rejected() {
        let limits = GeometryLimits {
            borders_indent: 20,
            min_wall_len: 50,
            max_wall_len: 100,
        };

        assert!(matches!(
            GeometryFactory::new(limits, 120, 400),
            Err(GeometryError::CanvasTooSmall { .. })
        ));
    }
}
