//! Q-learning agent
//!
//! The agent picks moves through the ordered [`Strategy::CHAIN`] and learns
//! per-state action values with a one-step temporal difference update.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    config::AgentConfig,
    error::{Error, Result},
    q_learning::{
        strategy::{CENTER, Decision, Strategy},
        value_table::ValueTable,
    },
    tictactoe::{BoardState, LineAnalyzer, Player},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Tic-tac-toe agent combining fixed heuristics with a learned value table
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    config: AgentConfig,
    table: ValueTable,
    rng: StdRng,
}

impl QLearningAgent {
    /// Create an agent with an empty value table
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if any rate is outside `[0, 1]`.
    pub fn new(config: AgentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rng: build_rng(config.seed),
            config,
            table: ValueTable::new(),
        })
    }

    /// Replace the value table, e.g. with one loaded from disk
    pub fn with_table(mut self, table: ValueTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.set_seed(seed);
        self
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.config.seed = Some(seed);
    }

    pub fn player(&self) -> Player {
        self.config.player
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn table(&self) -> &ValueTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut ValueTable {
        &mut self.table
    }

    /// Forget everything learned so far
    pub fn reset_table(&mut self) {
        log::info!("clearing value table ({} states)", self.table.len());
        self.table.clear();
    }

    /// Pick a move for `state` from `available_actions`.
    ///
    /// `explore` enables the ε-random link of the chain; it is normally tied
    /// to training mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if `available_actions` is empty.
    pub fn choose_action(
        &mut self,
        state: &BoardState,
        available_actions: &[usize],
        explore: bool,
    ) -> Result<usize> {
        self.decide(state, available_actions, explore)
            .map(|decision| decision.action)
    }

    /// Like [`choose_action`](Self::choose_action) but also reports which
    /// strategy produced the move.
    pub fn decide(
        &mut self,
        state: &BoardState,
        available_actions: &[usize],
        explore: bool,
    ) -> Result<Decision> {
        if available_actions.is_empty() {
            return Err(Error::NoValidMoves);
        }

        for strategy in Strategy::CHAIN {
            if let Some(action) = self.apply(strategy, state, available_actions, explore) {
                log::debug!("{:<12}{:<12}{}", strategy.name(), action, state.encode());
                return Ok(Decision { action, strategy });
            }
        }

        // Learned always yields a move for a non-empty action list
        Err(Error::NoValidMoves)
    }

    fn apply(
        &mut self,
        strategy: Strategy,
        state: &BoardState,
        available_actions: &[usize],
        explore: bool,
    ) -> Option<usize> {
        match strategy {
            Strategy::WinNow => {
                LineAnalyzer::first_winning_move(&state.cells, available_actions, self.player())
            }
            Strategy::Block => LineAnalyzer::first_winning_move(
                &state.cells,
                available_actions,
                self.player().opponent(),
            ),
            Strategy::Opening => available_actions.contains(&CENTER).then_some(CENTER),
            Strategy::Explore => {
                if explore && self.rng.random::<f64>() < self.config.exploration_rate {
                    available_actions.choose(&mut self.rng).copied()
                } else {
                    None
                }
            }
            Strategy::Learned => {
                let best = self.table.best_actions(state, available_actions);
                best.choose(&mut self.rng).copied()
            }
        }
    }

    /// One-step TD update of `(state, action)`.
    ///
    /// target = reward when `terminal`, otherwise reward + γ·max(values(next_state));
    /// value ← value + α·(target − value). Unseen states are initialized to zeros.
    pub fn update(
        &mut self,
        state: &BoardState,
        action: usize,
        reward: f64,
        next_state: &BoardState,
        terminal: bool,
    ) {
        if action >= 9 {
            log::warn!("ignoring update for out-of-range action {action}");
            return;
        }

        let target = if terminal {
            reward
        } else {
            reward + self.config.discount_factor * self.table.max_value(next_state)
        };

        let alpha = self.config.learning_rate;
        let value = &mut self.table.values_mut(state)[action];
        *value += alpha * (target - *value);
        log::debug!(
            "{:<12}{:<12}{} -> {:.4}",
            "update",
            action,
            state.encode(),
            *value
        );
    }
}
