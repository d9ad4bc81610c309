//! Session state: the cards, the cursor, the score, and the phase.
//!
//! ## Phase
//!
//! ```text
//! Menu ──start──▶ Playing ──last pair──▶ Complete
//!   ▲               │  ▲                    │
//!   └──abandon──────┘  └──────replay────────┘
//! ```
//!
//! `Playing` is split further so the resolution window is part of the state
//! rather than a detached timer:
//!
//! - `Selecting`: zero or one card face-up, selection open
//! - `Resolving`: two cards face-up, outcome decided, waiting for its deadline
//! - `Finishing`: every pair found, waiting to show the completion screen
//!
//! ## SessionSnapshot
//!
//! Front ends read a [`SessionSnapshot`]. Cards live in an `im::Vector`, so
//! taking a snapshot every frame is O(1) and never aliases engine state.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardInstance, InstanceId};
use crate::core::Position;
use crate::levels::LevelSpec;

/// Face-up cards waiting for resolution. Never more than two.
pub type Selection = SmallVec<[InstanceId; 2]>;

/// Outcome of comparing two revealed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Same content; the pair will be marked matched.
    Match,
    /// Different content; both cards will flip back.
    Mismatch,
}

/// A decided pair waiting for its reveal window to elapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolution {
    /// The two revealed cards, in selection order.
    pub cards: [InstanceId; 2],
    /// What will happen at the deadline.
    pub outcome: Outcome,
    /// Engine clock time at which the resolution fires.
    pub deadline: Duration,
}

/// Sub-state of an active game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayState {
    /// Accepting card selections.
    Selecting,
    /// Two cards are face-up and a resolution is scheduled.
    Resolving(PendingResolution),
    /// All pairs are found; completion fires at `deadline`.
    Finishing {
        /// Engine clock time of the completion.
        deadline: Duration,
    },
}

/// Coarse game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Level selection. Initial phase.
    Menu,
    /// A game is in progress.
    Playing(PlayState),
    /// All pairs found.
    Complete,
}

impl Phase {
    /// Check if a game is in progress.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing(_))
    }

    /// Check if a new card may be selected right now.
    #[must_use]
    pub fn accepts_selection(&self) -> bool {
        matches!(self, Phase::Playing(PlayState::Selecting))
    }

    /// Check if a resolution window is open.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        matches!(self, Phase::Playing(PlayState::Resolving(_)))
    }

    /// The next scheduled wake-up, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        match self {
            Phase::Playing(PlayState::Resolving(pending)) => Some(pending.deadline),
            Phase::Playing(PlayState::Finishing { deadline }) => Some(*deadline),
            _ => None,
        }
    }
}

/// Authoritative state of one game session.
///
/// Only the engine mutates it; everyone else gets `&SessionState` or a
/// [`SessionSnapshot`].
#[derive(Clone, Debug)]
pub struct SessionState {
    pub(super) level: LevelSpec,
    pub(super) cards: Vector<CardInstance>,
    pub(super) cursor: Position,
    pub(super) selection: Selection,
    pub(super) matched_pairs: usize,
    pub(super) score: u32,
    pub(super) moves: u32,
    pub(super) phase: Phase,
}

impl SessionState {
    /// Empty state sitting in the menu.
    pub(super) fn menu(level: LevelSpec) -> Self {
        Self {
            level,
            cards: Vector::new(),
            cursor: Position::origin(),
            selection: Selection::new(),
            matched_pairs: 0,
            score: 0,
            moves: 0,
            phase: Phase::Menu,
        }
    }

    /// Fresh game over a dealt deck.
    pub(super) fn playing(level: LevelSpec, deck: Vec<CardInstance>) -> Self {
        Self {
            cards: deck.into_iter().collect(),
            phase: Phase::Playing(PlayState::Selecting),
            ..Self::menu(level)
        }
    }

    /// The level being played (or selected, in the menu).
    #[must_use]
    pub fn level(&self) -> &LevelSpec {
        &self.level
    }

    /// Cards in row-major order. Empty outside a game.
    #[must_use]
    pub fn cards(&self) -> &Vector<CardInstance> {
        &self.cards
    }

    /// Current cursor cell.
    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Face-up cards awaiting resolution.
    #[must_use]
    pub fn selection(&self) -> &[InstanceId] {
        &self.selection
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs in this level.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.level.pair_count()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Cards turned over so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The card at a grid cell.
    #[must_use]
    pub fn card_at(&self, at: Position) -> Option<&CardInstance> {
        if !at.within(self.level.rows, self.level.cols) {
            return None;
        }
        self.cards.get(at.index(self.level.cols))
    }

    /// The card under the cursor.
    #[must_use]
    pub fn card_at_cursor(&self) -> Option<&CardInstance> {
        self.card_at(self.cursor)
    }

    /// Find a card by instance id.
    #[must_use]
    pub fn card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub(super) fn card_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        self.cards.get_mut(index)
    }

    /// Number of cards marked matched.
    #[must_use]
    pub fn matched_cards(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            level: self.level.clone(),
            cards: self.cards.clone(),
            cursor: self.cursor,
            selection: self.selection.clone(),
            matched_pairs: self.matched_pairs,
            total_pairs: self.total_pairs(),
            score: self.score,
            moves: self.moves,
            phase: self.phase,
        }
    }
}

/// Detached, cheaply cloned copy of a session for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub level: LevelSpec,
    pub cards: Vector<CardInstance>,
    pub cursor: Position,
    pub selection: Selection,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub score: u32,
    pub moves: u32,
    pub phase: Phase,
}

impl SessionSnapshot {
    /// Cards of one grid row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &CardInstance> {
        let cols = self.level.cols;
        self.cards.iter().skip(row.saturating_mul(cols)).take(cols)
    }
}
