//! # memory-pairs
//!
//! Game-state engine for an accessible memory-matching game, built for
//! visually impaired children: every action is reachable from the keyboard
//! and every state change is narrated for a screen reader, with optional
//! audio cues.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `GameEngine` owns the session. Front ends send input
//!    events and read snapshots; they never write state.
//!
//! 2. **Time is explicit**: Reveal windows are deadlines on an engine clock,
//!    modelled as a phase. No timers, no threads, no callbacks.
//!
//! 3. **Narrate, don't throw**: Player mistakes become announcements. Only
//!    an unplayable level is an error.
//!
//! 4. **Deterministic dealing**: Decks come from a Fisher–Yates shuffle over
//!    an injectable entropy source, so tests can pin exact layouts.
//!
//! ## Modules
//!
//! - `core`: Grid positions, RNG, configuration, errors
//! - `cards`: Card definitions, instances, and the card pool
//! - `levels`: Library levels and custom-grid validation
//! - `deck`: Deck builder
//! - `announce`: Announcement sink and audio cues
//! - `engine`: Session state and the game-state engine

pub mod core;
pub mod cards;
pub mod levels;
pub mod deck;
pub mod announce;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Direction, EngineConfig, Entropy, GameRng, IdentityEntropy, PairsError, Position, Result,
};

pub use crate::cards::{CardDefinition, CardFace, CardId, CardInstance, CardPool, InstanceId};

pub use crate::levels::{LevelCatalog, LevelSpec};

pub use crate::deck::build_deck;

pub use crate::announce::{
    Announcement, AnnouncementSink, Cue, NullSink, RecordingSink, Tone, TracingSink,
};

pub use crate::engine::{
    GameEngine, InputEvent, Outcome, PendingResolution, Phase, PlayState, SessionSnapshot,
    SessionState,
};
