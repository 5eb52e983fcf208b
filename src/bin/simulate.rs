//! Campaign balance simulator CLI.
//!
//! Run Monte Carlo batches of autopilot playthroughs.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 runs
//!   cargo run --bin simulate -- -n 100          # 100 runs
//!   cargo run --bin simulate -- --seed 42       # Reproducible batch

use dungeon_runner::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════╗");
    println!("║        DUNGEON RUNNER BALANCE SIMULATOR       ║");
    println!("╚═══════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:             {}", config.num_runs);
    println!("  Potion threshold: {}% HP", config.potion_percent);
    if let Some(seed) = config.seed {
        println!("  Seed:             {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--potion" => {
                if i + 1 < args.len() {
                    config.potion_percent = args[i + 1].parse().unwrap_or(35);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                println!("Dungeon Runner balance simulator\n");
                println!("Usage: simulate [OPTIONS]\n");
                println!("Options:");
                println!("  -n, --runs N    Number of campaigns to play (default 1000)");
                println!("  -s, --seed N    Base seed for reproducible batches");
                println!("  --potion N      Autopilot potion threshold in percent (default 35)");
                println!("  -v, --verbose   Per-run detail");
                println!("  -q, --quiet     Suppress per-run output");
                println!("  -h, --help      Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'simulate --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}
