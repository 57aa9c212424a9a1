use std::io;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use parking_manager::console::Console;
use parking_manager::lot::{Level, LogObserver};
use parking_manager::simulation::{LotSimulation, SimulationConfig};

#[derive(Parser)]
#[command(name = "parking_manager")]
#[command(about = "Parking lot manager with regular and EV slots")]
struct Cli {
    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Read lot commands from standard input (default)
    Console,

    /// Run a headless simulation with random arrivals and departures
    Simulate {
        /// Number of regular slots
        #[arg(long, default_value = "10")]
        capacity: usize,

        /// Number of EV slots
        #[arg(long, default_value = "4")]
        ev_capacity: usize,

        /// Floor level of the lot
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        level: Level,

        /// Number of simulation ticks to run
        #[arg(long, default_value = "100")]
        ticks: u32,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Chance per tick that a vehicle arrives
        #[arg(long, default_value = "0.6")]
        arrival_rate: f32,

        /// Chance per tick that a parked vehicle leaves
        #[arg(long, default_value = "0.4")]
        departure_rate: f32,

        /// Chance that an arriving vehicle is electric
        #[arg(long, default_value = "0.3")]
        ev_share: f32,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,parking_manager=info"),
    )
    .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Mode::Console) {
        Mode::Console => run_console(),
        Mode::Simulate {
            capacity,
            ev_capacity,
            level,
            ticks,
            seed,
            arrival_rate,
            departure_rate,
            ev_share,
        } => {
            let config = SimulationConfig {
                capacity,
                ev_capacity,
                level,
                arrival_rate,
                departure_rate,
                ev_share,
            };
            run_headless(config, ticks, seed)
        }
    }
}

/// Run the interactive console on stdin/stdout
fn run_console() -> Result<()> {
    println!("Parking Lot Manager. Type 'help' for commands.");
    let mut console = Console::new();
    let stdin = io::stdin();
    console
        .run(stdin.lock(), io::stdout())
        .context("Console session failed")
}

/// Run the simulation in headless mode
fn run_headless(config: SimulationConfig, ticks: u32, seed: Option<u64>) -> Result<()> {
    info!(
        "Running parking simulation: {} regular, {} EV slots, {} ticks",
        config.capacity, config.ev_capacity, ticks
    );

    let mut sim = match seed {
        Some(seed) => LotSimulation::new_with_seed(config, seed),
        None => LotSimulation::new(config),
    };

    // Kept alive for the whole run; the lot only holds a weak handle
    let observer = Rc::new(LogObserver);
    sim.lot.attach(&observer);

    println!("Initial state:");
    sim.print_summary();
    println!();

    sim.run(ticks).context("Simulation failed")?;

    println!("=== Final State ===");
    sim.print_summary();
    sim.stats.log_summary();
    Ok(())
}
