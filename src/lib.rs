pub mod config;
pub mod fixture;
pub mod generator;
pub mod geometry;

pub use config::MapConfig;
pub use generator::{MapGenerator, ResearchMap};
pub use geometry::{Building, BuildingKind, GeometryError, HealthStatus, PopulationUnit};
