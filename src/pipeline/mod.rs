//! Offline training against scripted opponents

pub mod opponents;
pub mod training;

pub use opponents::{DefensiveLearner, RandomLearner};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};
