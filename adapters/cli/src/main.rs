#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs Hero Defense sessions from scripts or stdin.

mod config;
mod script;
mod session;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use hero_defense_world::{Config, World};

use crate::session::Session;

/// Command-line arguments accepted by the Hero Defense binary.
#[derive(Debug, Parser)]
#[command(
    name = "hero-defense",
    about = "Place heroes along the enemy path and start waves from a line-oriented script."
)]
struct CliArgs {
    /// TOML file overriding the starting economy and map.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Script to execute instead of reading commands from stdin.
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,
    /// Seed for hero identifier suffixes, overriding the configuration.
    #[arg(long)]
    seed: Option<u64>,
    /// Only print notifications and explicit `show` frames.
    #[arg(long)]
    quiet: bool,
}

/// Entry point for the Hero Defense command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    let mut config = match &args.config {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };
    if let Some(seed) = args.seed {
        config.id_seed = seed;
    }

    let world = World::from_config(config).context("configuration describes an unusable map")?;
    log::debug!("session configured: quiet={}", args.quiet);

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut session = Session::new(world, stdout.lock(), args.quiet);
    session.run(input)
}
