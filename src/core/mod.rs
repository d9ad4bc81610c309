//! Core engine types: grid coordinates, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by the deck builder and the
//! game-state engine.

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::EngineConfig;
pub use error::{PairsError, Result};
pub use grid::{Direction, Position};
pub use rng::{fisher_yates, Entropy, GameRng, IdentityEntropy};
