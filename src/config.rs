//! Generation parameters and their YAML loader.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn default_indent_from_borders() -> u32 {
    4
}

fn default_minimal_wall_length() -> u32 {
    50
}

fn default_wall_length_divider() -> u32 {
    4
}

fn default_iteration_constraint() -> u32 {
    100
}

fn default_random_seed() -> u64 {
    42
}

/// All parameters the generator reads. Values are taken as already valid;
/// deserialization is the only gatekeeper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub map_length: u32,
    pub map_width: u32,
    #[serde(default = "default_indent_from_borders")]
    pub indent_from_borders: u32,
    #[serde(default = "default_minimal_wall_length")]
    pub minimal_wall_length: u32,
    #[serde(default = "default_wall_length_divider")]
    pub wall_length_divider: u32,
    pub population: u32,
    pub buildings: u32,
    #[serde(default = "default_iteration_constraint")]
    pub iteration_constraint: u32,
    #[serde(default = "default_random_seed")]
    pub random_seed: u64,
}

impl MapConfig {
    /// Load a configuration from a YAML file.
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: MapConfig = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Save the configuration to a YAML file.
    pub fn to_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Fixed 500x500 configuration backing the deterministic test fixture.
    pub fn dummy() -> Self {
        Self {
            map_length: 500,
            map_width: 500,
            indent_from_borders: 4,
            minimal_wall_length: 50,
            wall_length_divider: 4,
            population: 20,
            buildings: 4,
            iteration_constraint: 100,
            random_seed: 7,
        }
    }

    /// Largest wall length allowed on this canvas.
    pub fn max_wall_length(&self) -> u32 {
        self.map_length / self.wall_length_divider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_config_is_fixed() {
        let config = MapConfig::dummy();

        assert_eq!(config.map_length, 500);
        assert_eq!(config.map_width, 500);
        assert_eq!(config.buildings, 4);
        assert_eq!(config.max_wall_length(), 125);
    }

    #[test]
    fn yaml_round_trip() {
        let config = MapConfig::dummy();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        config.to_yaml(&path).unwrap();

        let loaded = MapConfig::from_yaml(&path).unwrap();
        assert_eq!(loaded.map_length, config.map_length);
        assert_eq!(loaded.population, config.population);
        assert_eq!(loaded.random_seed, config.random_seed);
    }

    #[test]
    fn optional_fields_take_defaults() {
        let config: MapConfig = serde_yaml::from_str(
            "map_length: 800\nmap_width: 600\npopulation: 100\nbuildings: 10\n",
        )
        .unwrap();

        assert_eq!(config.indent_from_borders, 4);
        assert_eq!(config.minimal_wall_length, 50);
        assert_eq!(config.iteration_constraint, 100);
        assert_eq!(config.max_wall_length(), 200);
    }
}
