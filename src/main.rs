mod presenter;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use lift_sim::simulation::{
    demo_layout, passenger_count, random_layout, run_lift, Passenger, DEFAULT_CAPACITY,
    DEFAULT_FRAME_DELAY_MS,
};
use presenter::{JsonLinesPresenter, PacedPresenter};

#[derive(Parser)]
#[command(name = "lift_sim")]
#[command(about = "Single elevator dispatch simulation")]
struct Cli {
    /// Waiting passengers per floor as JSON, e.g. '[[], [2], []]'
    #[arg(long, conflicts_with = "random_floors")]
    layout: Option<String>,

    /// Number of passengers the car can hold
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Generate a random building with this many floors
    #[arg(long)]
    random_floors: Option<usize>,

    /// Number of passengers placed in a random building
    #[arg(long, default_value = "20")]
    random_passengers: usize,

    /// Seed for the random building, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between two drawn frames
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    delay_ms: u64,

    /// Print every snapshot as a JSON line instead of drawing it
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,lift_sim=info"),
    )
    .init();

    let cli = Cli::parse();
    let layout = resolve_layout(&cli)?;

    if cli.json {
        run_lift(layout, cli.capacity, JsonLinesPresenter)?;
        return Ok(());
    }

    println!("Running lift simulation in headless mode...");
    println!(
        "Floors: {}, Passengers: {}, Capacity: {}",
        layout.len(),
        passenger_count(&layout),
        cli.capacity
    );
    println!();

    let mut presenter = PacedPresenter::spawn(Duration::from_millis(cli.delay_ms));
    let history = run_lift(layout, cli.capacity, &mut presenter)?;
    let frames = presenter.finish()?;

    println!("=== Final State ===");
    println!("Frames drawn: {}", frames);
    println!("Floor history: {:?}", history);
    Ok(())
}

fn resolve_layout(cli: &Cli) -> Result<Vec<Vec<Passenger>>> {
    if let Some(json) = &cli.layout {
        return serde_json::from_str(json).context("Layout must be a JSON array of floor lists");
    }

    if let Some(floors) = cli.random_floors {
        let layout = match cli.seed {
            Some(seed) => random_layout(floors, cli.random_passengers, &mut StdRng::seed_from_u64(seed)),
            None => random_layout(floors, cli.random_passengers, &mut rand::rng()),
        };
        return Ok(layout);
    }

    Ok(demo_layout())
}
