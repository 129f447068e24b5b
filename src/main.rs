use anyhow::Result;
use clap::Parser;

use logistics_sim::simulation::{ScenarioKind, SimWorld, TICK_INTERVAL_SECS};

#[derive(Parser)]
#[command(name = "logistics_sim")]
#[command(about = "Headless logistics route and scenario simulation")]
struct Cli {
    /// Disruption scenario to run (supplier-delay, traffic-jam, document-issue)
    #[arg(long)]
    scenario: Option<ScenarioKind>,

    /// Number of simulation ticks to run
    #[arg(long, default_value = "400")]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value_t = TICK_INTERVAL_SECS)]
    delta: f32,

    /// Seed for the environmental RNG (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Approve the scenario recommendation as soon as it is offered
    #[arg(long)]
    approve: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut world = match cli.seed {
        Some(seed) => SimWorld::new_with_seed(seed)?,
        None => SimWorld::new()?,
    };

    println!("Running logistics simulation in headless mode...");
    println!("Ticks: {}, Delta: {}s", cli.ticks, cli.delta);
    if let Some(kind) = cli.scenario {
        println!("Scenario: {}", kind);
        world.select_scenario(kind);
    }
    println!();

    println!("Initial state:");
    world.print_summary();
    world.draw_map();

    // Print a summary after every simulated ~5 seconds.
    let summary_every = ((5.0 / cli.delta).ceil() as u32).max(1);

    for tick in 1..=cli.ticks {
        world.tick(cli.delta);

        if cli.approve && world.recommendation_available {
            println!(">>> Approving recommendation at {:.1}s", world.time);
            world.approve_recommendation();
        }

        if tick % summary_every == 0 {
            println!(
                "--- After tick {} ({:.1}s simulated time) ---",
                tick, world.time
            );
            world.print_summary();
            println!();
        }
    }

    println!("=== Final State ===");
    world.print_summary();
    world.draw_map();

    Ok(())
}
