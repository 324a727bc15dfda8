//! Shared configuration for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{config::AgentConfig, tictactoe::Player};

/// Default location of the persisted value table
pub const DEFAULT_TABLE_PATH: &str = "q_table.msgpack";

/// Options every command accepts
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Value table file
    #[arg(long, short = 't', global = true, default_value = DEFAULT_TABLE_PATH)]
    pub table: PathBuf,

    /// JSON file with agent settings (player, learning_rate, discount_factor, exploration_rate, seed)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

impl CommonArgs {
    /// Resolve the agent configuration: JSON file first, then flag overrides.
    pub fn agent_config(&self, player: Option<Player>) -> Result<AgentConfig> {
        let mut config = match &self.config {
            Some(path) => AgentConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => AgentConfig::default(),
        };

        if let Some(player) = player {
            config = config.with_player(player);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }
}
