use anyhow::Result;
use clap::{Parser, ValueEnum};
use grid_snake::app::App;
use grid_snake::game::{GameConfig, GameRng, RngSource};

#[derive(Parser)]
#[command(name = "grid-snake")]
#[command(version, about = "Arcade Snake on a toroidal grid")]
struct Cli {
    /// Which variant to play
    #[arg(long, default_value = "deluxe")]
    variant: Variant,

    /// Play field width in pixels (must be a multiple of the cell size)
    #[arg(long)]
    width: Option<i32>,

    /// Play field height in pixels (must be a multiple of the cell size)
    #[arg(long)]
    height: Option<i32>,

    /// Seed the randomness source for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum Variant {
    /// Bare game: no score readout, silent reset on self-collision
    Classic,
    /// Score readout, game-over screen with restart
    Deluxe,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.variant {
        Variant::Classic => GameConfig::classic(),
        Variant::Deluxe => GameConfig::deluxe(),
    };
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    config.validate()?;

    let rng: Box<dyn RngSource> = match cli.seed {
        Some(seed) => Box::new(GameRng::seeded(seed)),
        None => Box::new(GameRng::from_entropy()),
    };

    let mut app = App::new(config, rng);
    app.run().await
}
