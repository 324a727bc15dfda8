//! Ports (trait boundaries) for external dependencies.
//!
//! These traits are owned by the domain and implemented by adapters
//! (storage) or by the pipeline (scripted opponents).

pub mod learner;
pub mod repository;

pub use learner::Learner;
pub use repository::ValueTableRepository;
