//! Randomness and tile generation.
//!
//! The generator is the only non-deterministic collaborator of the engine.
//! It is always driven by an injected [`TileRng`], so seeding it makes whole
//! games reproducible.
mod error;
mod generator;
mod rng;

pub use error::GeneratorError;
pub use generator::TileGenerator;
pub use rng::{PcgRng, TileRng};
