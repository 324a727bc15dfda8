//! Interactive session: one live game, one agent, one value table store.
//!
//! The session replaces ambient global state. A driver (the CLI, a test, a
//! UI) owns a [`Session`] and routes every interaction through it.

use std::path::{Path, PathBuf};

use crate::{
    config::AgentConfig,
    error::{Error, Result},
    ports::ValueTableRepository,
    q_learning::{Decision, QLearningAgent},
    tictactoe::{BoardState, Game, GameStatus, Player},
};

/// Reward for a move that wins the game. Every other move, including those
/// in lost or drawn games, earns zero.
pub const WIN_REWARD: f64 = 1.0;

/// Result of [`Session::play_turn`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnOutcome {
    /// The human move was illegal; nothing changed
    Rejected,
    /// The human move was applied, followed by the agent's reply if the game
    /// was still open
    Played {
        reply: Option<Decision>,
        status: GameStatus,
    },
}

/// Let the agent move on `game` and learn from that single transition.
///
/// The update uses the board before the agent's move as `state` and the board
/// right after it as `next_state`; the opponent's reply is not part of the
/// transition.
///
/// # Errors
///
/// Returns [`Error::NoValidMoves`] if the game is already over.
pub fn play_agent_turn(
    game: &mut Game,
    agent: &mut QLearningAgent,
    explore: bool,
) -> Result<Decision> {
    if game.is_terminal() {
        return Err(Error::NoValidMoves);
    }

    let player = agent.player();
    let state = game.state();
    let decision = agent.decide(&state, &game.available_actions(), explore)?;
    if !game.make_move(decision.action, player) {
        return Err(Error::InvalidPosition {
            position: decision.action,
        });
    }

    let reward = if game.winner() == Some(player) {
        WIN_REWARD
    } else {
        0.0
    };
    agent.update(
        &state,
        decision.action,
        reward,
        &game.state(),
        game.is_terminal(),
    );
    Ok(decision)
}

/// A human-versus-agent session
pub struct Session<R: ValueTableRepository> {
    game: Game,
    agent: QLearningAgent,
    repository: R,
    table_path: PathBuf,
    train_mode: bool,
}

impl<R: ValueTableRepository> Session<R> {
    /// Build an agent from `config` and load its table from `path` if one was
    /// saved there; otherwise start with an empty table.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or an unreadable/corrupt table.
    pub fn open(config: AgentConfig, repository: R, path: impl Into<PathBuf>) -> Result<Self> {
        let table_path = path.into();
        let table = repository.load(&table_path)?.unwrap_or_default();
        let agent = QLearningAgent::new(config)?.with_table(table);
        Ok(Self::new(agent, repository, table_path))
    }

    /// Wrap an existing agent without touching storage
    pub fn new(agent: QLearningAgent, repository: R, path: impl Into<PathBuf>) -> Self {
        Self {
            game: Game::new(),
            agent,
            repository,
            table_path: path.into(),
            train_mode: false,
        }
    }

    /// Start a new game
    pub fn reset(&mut self) -> BoardState {
        self.game.reset()
    }

    pub fn state(&self) -> BoardState {
        self.game.state()
    }

    pub fn available_actions(&self) -> Vec<usize> {
        self.game.available_actions()
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn agent(&self) -> &QLearningAgent {
        &self.agent
    }

    pub fn human_player(&self) -> Player {
        self.agent.player().opponent()
    }

    pub fn train_mode(&self) -> bool {
        self.train_mode
    }

    /// When on, the agent may explore with probability ε
    pub fn set_train_mode(&mut self, on: bool) {
        self.train_mode = on;
    }

    pub fn table_path(&self) -> &Path {
        &self.table_path
    }

    /// Side whose turn it is. X always opens.
    pub fn to_move(&self) -> Player {
        if self.game.state().occupied_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Apply the human move at `index`, then let the agent reply.
    ///
    /// An illegal human move, or one made out of turn, yields
    /// [`TurnOutcome::Rejected`] and leaves the session untouched. No value
    /// update is made when the human move ends the game.
    pub fn play_turn(&mut self, index: usize) -> Result<TurnOutcome> {
        if self.to_move() != self.human_player()
            || !self.game.make_move(index, self.human_player())
        {
            return Ok(TurnOutcome::Rejected);
        }

        let reply = if self.game.is_terminal() {
            None
        } else {
            Some(play_agent_turn(
                &mut self.game,
                &mut self.agent,
                self.train_mode,
            )?)
        };

        Ok(TurnOutcome::Played {
            reply,
            status: self.game.status(),
        })
    }

    /// Let the agent move now, e.g. to open the game when it plays first
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfTurn`] when it is the human's move and
    /// [`Error::NoValidMoves`] when the game is over.
    pub fn agent_move(&mut self) -> Result<Decision> {
        let player = self.agent.player();
        if !self.game.is_terminal() && self.to_move() != player {
            return Err(Error::OutOfTurn { player });
        }
        play_agent_turn(&mut self.game, &mut self.agent, self.train_mode)
    }

    /// Overwrite the stored table with the agent's current one
    pub fn save(&self) -> Result<()> {
        self.repository.save(self.agent.table(), &self.table_path)
    }

    /// Forget all learned values (the stored copy is untouched until `save`)
    pub fn reset_table(&mut self) {
        self.agent.reset_table();
    }
}
