//! Learner port - abstraction for scripted opponents
//!
//! The training pipeline pits the Q-learning agent against anything that
//! implements this trait.

use crate::{
    Result,
    tictactoe::{BoardState, Player},
};

/// A move source for one side of the board.
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::Learner,
///     tictactoe::{BoardState, Player},
/// };
///
/// struct FirstFree;
///
/// impl Learner for FirstFree {
///     fn select_move(&mut self, state: &BoardState, _player: Player) -> noughts::Result<usize> {
///         state
///             .empty_positions()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
/// ```
pub trait Learner {
    /// Select a move (0-8) for `player` on the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available.
    fn select_move(&mut self, state: &BoardState, player: Player) -> Result<usize>;

    /// Name used in logs and summaries.
    fn name(&self) -> &str;

    /// Seed the learner's internal random number generator.
    ///
    /// # Default Implementation
    ///
    /// Does nothing and returns `Ok(())`.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
