//! Train command - offline training against a scripted opponent

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    adapters::MsgPackRepository,
    cli::{
        config::CommonArgs,
        output::{create_training_progress, print_kv, print_section},
    },
    pipeline::{DefensiveLearner, RandomLearner, TrainingConfig, TrainingPipeline},
    ports::{Learner, ValueTableRepository},
    q_learning::QLearningAgent,
    tictactoe::Player,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OpponentType {
    /// Uniformly random moves
    Random,
    /// Wins or blocks when it can, random otherwise
    Defensive,
}

#[derive(Parser, Debug)]
#[command(about = "Train the agent against a scripted opponent")]
pub struct TrainArgs {
    /// Opponent to train against
    #[arg(long, short = 'o', value_enum, default_value = "random")]
    pub opponent: OpponentType,

    /// Number of training games
    #[arg(long, short = 'g', default_value_t = 500)]
    pub games: usize,

    /// Which token the agent controls (`x` or `o`)
    #[arg(long)]
    pub agent_player: Option<String>,

    /// Which token makes the first move (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_player: String,

    /// Disable ε-random exploration while training
    #[arg(long, default_value_t = false)]
    pub no_explore: bool,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Do not overwrite the value table file after training
    #[arg(long, default_value_t = false)]
    pub no_save: bool,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

pub fn execute(args: TrainArgs, common: &CommonArgs) -> Result<()> {
    let player = args
        .agent_player
        .as_deref()
        .map(str::parse::<Player>)
        .transpose()?;
    let first_player: Player = args
        .first_player
        .parse()
        .context("Invalid value for --first-player")?;
    let config = common.agent_config(player)?;

    let repository = MsgPackRepository::new();
    let table = repository
        .load(&common.table)
        .with_context(|| format!("Failed to load value table: {}", common.table.display()))?
        .unwrap_or_default();
    let mut agent = QLearningAgent::new(config)?.with_table(table);

    let mut opponent: Box<dyn Learner> = match args.opponent {
        OpponentType::Random => Box::new(RandomLearner::new("Random".to_string())),
        OpponentType::Defensive => Box::new(DefensiveLearner::new("Defensive".to_string())),
    };

    let mut pipeline = TrainingPipeline::new(TrainingConfig {
        num_games: args.games,
        // Keep the opponent's stream distinct from the agent's
        seed: common.seed.map(|s| s.wrapping_add(1)),
        explore: !args.no_explore,
        first_player,
    });
    if !args.quiet {
        let bar = create_training_progress(args.games as u64);
        bar.set_message(format!("vs {}", opponent.name()));
        pipeline = pipeline.with_progress(bar);
    }

    let result = pipeline.run(&mut agent, opponent.as_mut())?;

    print_section("Training Summary");
    print_kv("Opponent", opponent.name());
    print_kv("Agent plays", &agent.player().to_string());
    print_kv("Games", &result.total_games.to_string());
    print_kv(
        "Wins",
        &format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0),
    );
    print_kv(
        "Losses",
        &format!("{} ({:.1}%)", result.losses, result.loss_rate * 100.0),
    );
    print_kv("Table states", &result.table_states.to_string());

    if !args.no_save {
        repository
            .save(agent.table(), &common.table)
            .with_context(|| format!("Failed to save value table: {}", common.table.display()))?;
        print_kv("Saved to", &common.table.display().to_string());
    }

    if let Some(path) = &args.summary {
        result
            .save(path)
            .with_context(|| format!("Failed to write summary: {}", path.display()))?;
        print_kv("Summary", &path.display().to_string());
    }

    Ok(())
}
