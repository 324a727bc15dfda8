//! Training pipeline: the agent against a scripted opponent

use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Learner,
    q_learning::QLearningAgent,
    session::play_agent_turn,
    tictactoe::{Game, GameStatus, Player},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training games
    pub num_games: usize,

    /// Random seed for the opponent
    pub seed: Option<u64>,

    /// Whether the agent may take ε-random moves
    pub explore: bool,

    /// Which player opens every game
    pub first_player: Player,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_games: 500,
            seed: None,
            explore: true,
            first_player: Player::X,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total games played
    pub total_games: usize,

    /// Number of wins
    pub wins: usize,

    /// Number of draws
    pub draws: usize,

    /// Number of losses
    pub losses: usize,

    /// Win rate
    pub win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,

    /// Loss rate
    pub loss_rate: f64,

    /// States in the value table after training
    pub table_states: usize,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(
        total_games: usize,
        wins: usize,
        draws: usize,
        losses: usize,
        table_states: usize,
    ) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
            table_states,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Training pipeline for the agent against one opponent
pub struct TrainingPipeline {
    config: TrainingConfig,
    progress: Option<ProgressBar>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            progress: None,
        }
    }

    /// Advance `bar` once per finished game
    pub fn with_progress(mut self, bar: ProgressBar) -> Self {
        self.progress = Some(bar);
        self
    }

    /// Play `num_games` games and let the agent learn from each of its moves.
    ///
    /// The agent follows the same turn protocol as an interactive
    /// [`crate::session::Session`]: one update per agent move, none on the
    /// opponent's moves.
    pub fn run(
        &mut self,
        agent: &mut QLearningAgent,
        opponent: &mut dyn Learner,
    ) -> Result<TrainingResult> {
        if let Some(seed) = self.config.seed {
            opponent.set_rng_seed(seed)?;
        }

        log::info!(
            "{:<32}{} games vs {}",
            "beginning training",
            self.config.num_games,
            opponent.name()
        );

        let mut game = Game::new();
        let (mut wins, mut draws, mut losses) = (0, 0, 0);

        for _ in 0..self.config.num_games {
            match self.play_game(&mut game, agent, opponent)? {
                GameStatus::Won(winner) if winner == agent.player() => wins += 1,
                GameStatus::Won(_) => losses += 1,
                _ => draws += 1,
            }
            if let Some(bar) = &self.progress {
                bar.inc(1);
            }
        }

        if let Some(bar) = &self.progress {
            bar.finish_and_clear();
        }

        let result = TrainingResult::new(
            self.config.num_games,
            wins,
            draws,
            losses,
            agent.table().len(),
        );
        log::info!(
            "{:<32}W {} / D {} / L {} ({} states)",
            "finished training",
            result.wins,
            result.draws,
            result.losses,
            result.table_states
        );
        Ok(result)
    }

    fn play_game(
        &self,
        game: &mut Game,
        agent: &mut QLearningAgent,
        opponent: &mut dyn Learner,
    ) -> Result<GameStatus> {
        game.reset();
        let mut to_move = self.config.first_player;

        while !game.is_terminal() {
            if to_move == agent.player() {
                play_agent_turn(game, agent, self.config.explore)?;
            } else {
                let position = opponent.select_move(&game.state(), to_move)?;
                if !game.make_move(position, to_move) {
                    return Err(Error::InvalidPosition { position });
                }
            }
            to_move = to_move.opponent();
        }

        Ok(game.status())
    }
}
