//! noughts CLI - play tic-tac-toe against a Q-learning agent
//!
//! This CLI provides:
//! - Interactive play with optional online learning
//! - Offline training against scripted opponents
//! - Inspection of the saved value table

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{commands, config::CommonArgs};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe against a Q-learning agent", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the agent
    Play(commands::play::PlayArgs),

    /// Train the agent against a scripted opponent
    Train(commands::train::TrainArgs),

    /// Show what the agent has learned
    Inspect(commands::inspect::InspectArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => commands::play::execute(args, &cli.common),
        Commands::Train(args) => commands::train::execute(args, &cli.common),
        Commands::Inspect(args) => commands::inspect::execute(args, &cli.common),
    }
}
