//! Card instances - per-session card state.
//!
//! `CardInstance` is one physical card on the grid. Every definition dealt
//! into a session appears as exactly two instances.
//!
//! ## Lifecycle
//!
//! Created face-down by the deck builder, flipped and matched in place by
//! the engine, and dropped wholesale when the session ends or restarts.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// Identifier of a card instance, unique within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// How a card reads to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    /// Face-down.
    Hidden,
    /// Face-up and waiting to be resolved.
    Showing,
    /// Part of a found pair.
    Matched,
}

/// A card on the grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique instance ID.
    pub id: InstanceId,

    /// Definition this card shows.
    pub card_id: CardId,

    /// Is the card face-up?
    pub flipped: bool,

    /// Has the card's pair been found?
    pub matched: bool,
}

impl CardInstance {
    /// Create a face-down instance.
    #[must_use]
    pub fn new(id: InstanceId, card_id: CardId) -> Self {
        Self {
            id,
            card_id,
            flipped: false,
            matched: false,
        }
    }

    /// Current face of the card.
    #[must_use]
    pub fn face(&self) -> CardFace {
        if self.matched {
            CardFace::Matched
        } else if self.flipped {
            CardFace::Showing
        } else {
            CardFace::Hidden
        }
    }

    /// Check if the card may be selected: face-down and unmatched.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }

    /// Check if two instances form a pair.
    ///
    /// Compares content, never instance identity.
    #[must_use]
    pub fn pairs_with(&self, other: &CardInstance) -> bool {
        self.card_id == other.card_id
    }

    /// Turn the card face-up.
    pub fn reveal(&mut self) {
        self.flipped = true;
    }

    /// Turn the card face-down again.
    ///
    /// Matched cards stay face-up.
    pub fn conceal(&mut self) {
        if !self.matched {
            self.flipped = false;
        }
    }

    /// Mark the card as part of a found pair. It stays face-up.
    pub fn mark_matched(&mut self) {
        self.flipped = true;
        self.matched = true;
    }
}
