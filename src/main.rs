use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use torus_snake::game::{GameConfig, GameEngine};
use torus_snake::logging;
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrapping 20x20 grid")]
struct Cli {
    /// Seed for food placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref(), &cli.log_level)?;

    let config = GameConfig::default();
    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };
    tracing::info!(seed = ?cli.seed, "starting game");

    let mut human_mode = HumanMode::new(engine);
    human_mode.run().await?;

    Ok(())
}
