// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: pick a threshold floor and find it both ways.

use clap::Parser;
use std::process::ExitCode;
use throwing_balls::driver::DEFAULT_FLOORS;
use throwing_balls::{run, Floor, RunConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "throw",
    version,
    about = "Find the floor from which a dropped ball starts breaking"
)]
struct Cli {
    /// Building height N; the threshold is sampled from [0, N).
    #[arg(long, default_value_t = DEFAULT_FLOORS)]
    floors: Floor,

    /// Seed for a reproducible threshold.
    #[arg(long)]
    seed: Option<u64>,

    /// Also print the number of probes each strategy used.
    #[arg(long)]
    stats: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            floors: cli.floors,
            seed: cli.seed,
            show_stats: cli.stats,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from(Cli::parse());
    match run(&config) {
        Ok(report) => {
            println!("{report}");
            if config.show_stats {
                println!("{}", report.probe_summary());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
