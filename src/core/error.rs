//! Hard failures.
//!
//! Only malformed levels are errors. Everything a player can do wrong
//! (selecting a face-up card, walking into a wall) is a soft rejection
//! reported through the announcement sink instead.

use thiserror::Error;

/// Errors raised when a level cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairsError {
    /// The level cannot be dealt as a deck of pairs.
    #[error("Invalid level: {reason}")]
    InvalidLevel {
        /// Human-readable cause.
        reason: String,
    },

    /// A custom grid whose clamped cell count is odd.
    #[error("Total number of cards must be even ({rows}x{cols} grid)")]
    OddCellCount {
        /// Row count after clamping.
        rows: usize,
        /// Column count after clamping.
        cols: usize,
    },

    /// The card pool cannot supply one definition per pair.
    #[error("{needed} pairs need {needed} distinct cards but the pool has {available}")]
    PoolTooSmall {
        /// Pairs the grid needs.
        needed: usize,
        /// Definitions in the pool.
        available: usize,
    },
}

impl PairsError {
    /// Build an `InvalidLevel` error.
    pub fn invalid_level(reason: impl Into<String>) -> Self {
        Self::InvalidLevel {
            reason: reason.into(),
        }
    }
}

/// Result alias for fallible level and deck operations.
pub type Result<T> = std::result::Result<T, PairsError>;
