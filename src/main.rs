use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use epidemap::{config::MapConfig, generator::MapGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about = "Epidemic map layout generator")]
struct Cli {
    /// Path to the map configuration YAML file
    #[arg(long, default_value = "configs/city.yaml")]
    config: PathBuf,

    /// Override the random seed from the configuration
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "epidemap=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = MapConfig::from_yaml(&cli.config)?;
    if let Some(seed) = cli.seed {
        config.random_seed = seed;
    }

    let requested = config.buildings;
    let map = MapGenerator::new(config)?.generate();

    tracing::info!(
        "Generated {}x{} map: {} population units, {} of {} buildings placed",
        map.length(),
        map.width(),
        map.population().len(),
        map.buildings().len(),
        requested,
    );
    Ok(())
}
