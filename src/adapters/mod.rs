//! Adapters implementing domain ports.
//!
//! Storage back-ends for the value table; they depend on the ports module,
//! not the other way around.

pub mod in_memory_repository;
pub mod msgpack_repository;

pub use in_memory_repository::InMemoryRepository;
pub use msgpack_repository::MsgPackRepository;
