//! Terminal frontend for Maze Runner.

mod commands;
mod console;
mod render;

use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "maze-runner",
    about = "Maze Runner: gather relics and escape the living labyrinth",
    version
)]
struct Cli {
    /// Run an automated demo instead of the interactive game
    #[arg(long)]
    demo: bool,

    /// Seed the random number generator for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of turns the demo plays before exiting
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..))]
    turns: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let seed = cli.seed.unwrap_or_else(rand::random::<u64>);
    log::info!("starting session with seed {seed}");

    let result = if cli.demo {
        commands::demo::run(seed, cli.turns)
    } else {
        commands::play::run(seed)
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}
