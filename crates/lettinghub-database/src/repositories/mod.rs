//! Repository implementations for LettingHub entities.

pub mod property;

pub use property::PropertyRepository;
