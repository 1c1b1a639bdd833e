use anyhow::Result;
use clap::Parser;

use myxo_lib::model::config::AppConfig;
use myxo_lib::model::world::World;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 2000)]
    ticks: u64,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the RNG seed from the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the final world snapshot as JSON instead of a summary line
    #[arg(long)]
    snapshot: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match std::fs::read_to_string(&args.config) {
        Ok(content) => AppConfig::from_toml(&content)?,
        Err(_) => {
            tracing::warn!(path = %args.config, "config file not found, using defaults");
            AppConfig::default()
        }
    };
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    let mut world = World::new(config)?;
    for _ in 0..args.ticks {
        world.update();
        if world.agents.is_empty() {
            tracing::info!(tick = world.tick, "population extinct, stopping early");
            break;
        }
    }
    world.refresh_stats();

    if args.snapshot {
        println!("{}", serde_json::to_string_pretty(&world.snapshot())?);
    } else {
        let stats = &world.stats;
        println!(
            "tick {}: {} agents (avg energy {:.1}), {} food sources ({:.1} food), {} active trail cells",
            stats.tick,
            stats.live_agents,
            stats.avg_energy,
            stats.food_sources,
            stats.total_food,
            stats.active_trail_cells
        );
    }

    Ok(())
}
