//! CLI infrastructure
//!
//! Command-line driver for playing against, training, and inspecting the
//! agent.

pub mod commands;
pub mod config;
pub mod output;
