//! Scripted opponents used for training

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Learner,
    tictactoe::{BoardState, LineAnalyzer, Player},
};

/// Random move learner (baseline)
pub struct RandomLearner {
    name: String,
    rng: StdRng,
}

impl RandomLearner {
    /// Create a new random learner
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random learner with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Learner for RandomLearner {
    fn select_move(&mut self, state: &BoardState, _player: Player) -> Result<usize> {
        let moves = state.empty_positions();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Defensive policy learner
///
/// This learner will:
/// 1. Complete its own line if it can
/// 2. Block the other side's winning move if there is one
/// 3. Otherwise play randomly
pub struct DefensiveLearner {
    name: String,
    rng: StdRng,
}

impl DefensiveLearner {
    /// Create a new defensive learner
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a defensive learner with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Learner for DefensiveLearner {
    fn select_move(&mut self, state: &BoardState, player: Player) -> Result<usize> {
        let moves = state.empty_positions();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }

        if let Some(win) = LineAnalyzer::first_winning_move(&state.cells, &moves, player) {
            return Ok(win);
        }
        if let Some(block) =
            LineAnalyzer::first_winning_move(&state.cells, &moves, player.opponent())
        {
            return Ok(block);
        }

        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
