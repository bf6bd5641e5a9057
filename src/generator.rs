//! Map assembly: population generation and collision-avoiding building
//! placement.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{
    config::MapConfig,
    geometry::{Building, GeometryError, GeometryFactory, GeometryLimits, PopulationUnit},
};

/// The generated aggregate: canvas dimensions, population and buildings,
/// plus a snapshot of the configuration they were generated from.
///
/// Read-only after construction. The fixture path in [`crate::fixture`] is
/// the one in-crate exception: it replaces the building list wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchMap {
    pub(crate) config: MapConfig,
    pub(crate) length: u32,
    pub(crate) width: u32,
    pub(crate) population: Vec<PopulationUnit>,
    pub(crate) buildings: Vec<Building>,
}

impl ResearchMap {
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn population(&self) -> &[PopulationUnit] {
        &self.population
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn iter_population(&self) -> impl Iterator<Item = &PopulationUnit> {
        self.population.iter()
    }

    pub fn iter_buildings(&self) -> impl Iterator<Item = &Building> {
        self.buildings.iter()
    }
}

/// One-shot generator for a [`ResearchMap`].
///
/// Identities are handed out by a single allocator shared across both
/// generation phases: population units take `0..population`, building slots
/// continue from there, and a discarded building slot still consumes its
/// identity.
pub struct MapGenerator {
    config: MapConfig,
    factory: GeometryFactory,
    rng: ChaCha8Rng,
    next_id: u32,
}

impl MapGenerator {
    /// Build a generator seeded from the configuration.
    pub fn new(config: MapConfig) -> Result<Self, GeometryError> {
        let rng = ChaCha8Rng::seed_from_u64(config.random_seed);
        Self::with_rng(config, rng)
    }

    /// Build a generator around a caller-managed RNG.
    pub fn with_rng(config: MapConfig, rng: ChaCha8Rng) -> Result<Self, GeometryError> {
        let limits = GeometryLimits {
            borders_indent: config.indent_from_borders,
            min_wall_len: config.minimal_wall_length,
            max_wall_len: config.max_wall_length(),
        };
        let factory = GeometryFactory::new(limits, config.map_length, config.map_width)?;
        Ok(Self {
            config,
            factory,
            rng,
            next_id: 0,
        })
    }

    /// Run the generation pass: population first, then buildings.
    pub fn generate(mut self) -> ResearchMap {
        let population = self.create_population();
        let buildings = self.create_buildings();
        ResearchMap {
            length: self.config.map_length,
            width: self.config.map_width,
            population,
            buildings,
            config: self.config,
        }
    }

    /// Exactly `population` units, in generation order. Units may overlap
    /// each other and any building.
    fn create_population(&mut self) -> Vec<PopulationUnit> {
        let mut units = Vec::with_capacity(self.config.population as usize);
        for _ in 0..self.config.population {
            let id = self.allocate();
            units.push(self.factory.new_population_unit(id, &mut self.rng));
        }
        units
    }

    /// Up to `buildings` records. The first slot is accepted unconditionally;
    /// every later slot gets `iteration_constraint` randomized attempts,
    /// checked against all accepted buildings, and is dropped if none lands
    /// clear. Shortfall is silent.
    fn create_buildings(&mut self) -> Vec<Building> {
        let mut placed = Vec::with_capacity(self.config.buildings as usize);
        for _ in 0..self.config.buildings {
            let id = self.allocate();
            if placed.is_empty() {
                placed.push(self.factory.new_building(id, &mut self.rng));
                continue;
            }
            for _ in 0..self.config.iteration_constraint {
                let candidate = self.factory.new_building(id, &mut self.rng);
                if !placed.iter().any(|other| candidate.intersects(other)) {
                    placed.push(candidate);
                    break;
                }
            }
        }
        placed
    }

    fn allocate(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
