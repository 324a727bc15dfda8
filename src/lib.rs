//! Tic-tac-toe against a self-improving Q-learning agent
//!
//! This crate provides:
//! - A tic-tac-toe board engine with move validation and win/draw detection
//! - A Q-learning agent that combines fixed tactics with a learned value table
//! - Value table persistence behind a repository port (MessagePack on disk)
//! - An interactive session and an offline training pipeline
//! - A command-line driver

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod session;
pub mod tictactoe;

pub use config::AgentConfig;
pub use error::{Error, Result};
pub use session::{Session, TurnOutcome};
