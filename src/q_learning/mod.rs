//! Q-learning agent for tic-tac-toe
//!
//! The agent keeps a [`ValueTable`] of per-cell action values for every board
//! it has seen and picks moves through a fixed chain of strategies:
//!
//! | Order | Strategy | Move |
//! |-------|----------|------|
//! | 1 | win-now | lowest cell completing the agent's own line |
//! | 2 | block | lowest cell completing the opponent's line |
//! | 3 | opening | the center, if free |
//! | 4 | explore | uniform random cell with probability ε (training only) |
//! | 5 | learned | highest table value, uniform among ties |
//!
//! Values are learned with a one-step temporal difference rule:
//! `Q(s,a) ← Q(s,a) + α[target − Q(s,a)]` where `target` is the reward on a
//! terminal transition and `r + γ·max Q(s',·)` otherwise.
//!
//! ## Usage Example
//!
//! ```
//! use noughts::{AgentConfig, q_learning::QLearningAgent, tictactoe::{Game, Player}};
//!
//! let mut game = Game::new();
//! let mut agent = QLearningAgent::new(AgentConfig::new(Player::O).with_seed(1))?;
//!
//! game.make_move(0, Player::X);
//! let state = game.state();
//! let action = agent.choose_action(&state, &game.available_actions(), false)?;
//! assert_eq!(action, 4);
//!
//! game.make_move(action, Player::O);
//! agent.update(&state, action, 0.0, &game.state(), game.is_terminal());
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod agent;
pub mod serialization;
pub mod strategy;
pub mod value_table;

pub use agent::QLearningAgent;
pub use serialization::{SavedValueTable, TableEntry};
pub use strategy::{Decision, Strategy};
pub use value_table::{ActionValues, ValueTable};
