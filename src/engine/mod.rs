//! The game-state engine.
//!
//! [`GameEngine`] owns one [`SessionState`] and is the only thing that
//! mutates it. Front ends feed it [`InputEvent`]s (or call the operation
//! methods directly) and read back a [`SessionSnapshot`]; everything the
//! player needs to hear goes out through the [`AnnouncementSink`].
//!
//! ## Time
//!
//! The engine never sleeps or spawns timers. Revealing a second card opens
//! a resolution window with a deadline on the engine clock; the front end
//! asks [`GameEngine::time_until_deadline`] when to wake up and then calls
//! [`GameEngine::advance`]. While the window is open, selections are
//! rejected and cursor movement keeps working.
//!
//! ## Failures
//!
//! Only starting an unplayable level returns an error. Every other mistake
//! (selecting a face-up card, selecting mid-resolution, walking into a
//! wall) is a soft rejection: no state change, at most an announcement.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_pairs::announce::RecordingSink;
//! use memory_pairs::core::{Direction, EngineConfig};
//! use memory_pairs::engine::{GameEngine, Phase};
//!
//! let mut engine = GameEngine::new(EngineConfig::default(), RecordingSink::new(), 42);
//! engine.start().unwrap();
//!
//! engine.select_at_cursor();
//! engine.move_cursor(Direction::Right);
//! engine.select_at_cursor();
//! assert_eq!(engine.state().moves(), 2);
//!
//! // Let the reveal window elapse
//! engine.advance(Duration::from_secs(2));
//! assert!(engine.state().phase().accepts_selection());
//! assert!(engine.state().selection().is_empty());
//! ```

mod input;
mod state;

pub use input::InputEvent;
pub use state::{
    Outcome, PendingResolution, Phase, PlayState, Selection, SessionSnapshot, SessionState,
};

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::announce::{messages, AnnouncementSink, Cue};
use crate::cards::{CardId, CardPool};
use crate::core::{Direction, EngineConfig, Entropy, GameRng, Position, Result};
use crate::deck::build_deck;
use crate::levels::{LevelCatalog, LevelSpec};

/// Memory game engine.
///
/// Generic over the announcement sink and the entropy used for dealing.
pub struct GameEngine<S, E = GameRng> {
    config: EngineConfig,
    pool: CardPool,
    catalog: LevelCatalog,
    selected: LevelSpec,
    state: SessionState,
    clock: Duration,
    entropy: E,
    sink: S,
}

impl<S: AnnouncementSink> GameEngine<S, GameRng> {
    /// Create an engine with the standard pool, the library levels, and a
    /// seeded RNG.
    #[must_use]
    pub fn new(config: EngineConfig, sink: S, seed: u64) -> Self {
        Self::with_entropy(config, sink, GameRng::new(seed))
    }
}

impl<S: AnnouncementSink, E: Entropy> GameEngine<S, E> {
    /// Create an engine dealing from `entropy`.
    #[must_use]
    pub fn with_entropy(config: EngineConfig, sink: S, entropy: E) -> Self {
        let catalog = LevelCatalog::library();
        let selected = first_level(&catalog);
        Self {
            config,
            pool: CardPool::standard(),
            state: SessionState::menu(selected.clone()),
            selected,
            catalog,
            clock: Duration::ZERO,
            entropy,
            sink,
        }
    }

    /// Replace the card pool. Any running session is discarded.
    #[must_use]
    pub fn with_pool(mut self, pool: CardPool) -> Self {
        self.pool = pool;
        self.state = SessionState::menu(self.selected.clone());
        self
    }

    /// Replace the level catalog and select its first level. Any running
    /// session is discarded.
    #[must_use]
    pub fn with_catalog(mut self, catalog: LevelCatalog) -> Self {
        self.selected = first_level(&catalog);
        self.catalog = catalog;
        self.state = SessionState::menu(self.selected.clone());
        self
    }

    // === Accessors ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Detached snapshot of the session for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.snapshot()
    }

    /// Level that `start` will play.
    #[must_use]
    pub fn selected_level(&self) -> &LevelSpec {
        &self.selected
    }

    /// Built-in levels.
    #[must_use]
    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    /// Card pool decks are dealt from.
    #[must_use]
    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    /// Current engine clock.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// The announcement sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink, e.g. to drain recorded announcements.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // === Input ===

    /// Dispatch one input event.
    ///
    /// Only `Start` can fail, and only for an unplayable level.
    pub fn handle(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Move(direction) => self.move_cursor(direction),
            InputEvent::Select => self.select_at_cursor(),
            InputEvent::SelectCell(at) => self.select_cell(at),
            InputEvent::Start => return self.start(),
            InputEvent::ReturnToMenu => self.abandon_to_menu(),
            InputEvent::ChooseLevel(index) => self.choose_level(index),
            InputEvent::SubmitCustomLevel { rows, cols } => {
                self.submit_custom_level(rows, cols);
            }
        }
        Ok(())
    }

    // === Session lifecycle ===

    /// Start (or replay) the selected level.
    pub fn start(&mut self) -> Result<()> {
        let level = self.selected.clone();
        self.start_session(&level)
    }

    /// Deal a fresh deck for `level` and begin playing.
    ///
    /// Calling this while already playing the same level is a no-op, so a
    /// duplicated start signal never reshuffles a game in progress.
    ///
    /// ## Errors
    ///
    /// `InvalidLevel` if the level has an odd or empty grid, `PoolTooSmall`
    /// if it needs more pairs than the pool holds. The current state is left
    /// untouched.
    pub fn start_session(&mut self, level: &LevelSpec) -> Result<()> {
        if self.state.phase.is_playing() && self.state.level == *level && !self.state.cards.is_empty() {
            debug!(level = %level.name, "session already running, ignoring start");
            return Ok(());
        }

        let deck = match level
            .validate()
            .and_then(|()| build_deck(level.cell_count(), self.pool.definitions(), &mut self.entropy))
        {
            Ok(deck) => deck,
            Err(err) => {
                warn!(level = %level.name, %err, "cannot start session");
                return Err(err);
            }
        };

        self.selected = level.clone();
        self.state = SessionState::playing(level.clone(), deck);
        debug!(
            level = %level.name,
            rows = level.rows,
            cols = level.cols,
            "session started"
        );

        let message = messages::session_started(level, self.state.cursor);
        self.emit(&message, None);
        Ok(())
    }

    /// Leave the current game and return to the menu.
    ///
    /// Session state, including any pending resolution, is discarded.
    pub fn abandon_to_menu(&mut self) {
        debug!(phase = ?self.state.phase, "returning to menu");
        self.state = SessionState::menu(self.selected.clone());
        self.emit(messages::RETURNED_TO_MENU, None);
    }

    /// Pick a library level to play next.
    pub fn choose_level(&mut self, index: usize) {
        if self.state.phase.is_playing() {
            self.emit(messages::LEAVE_GAME_FIRST, None);
            return;
        }
        let Some(level) = self.catalog.get(index).cloned() else {
            let message = messages::level_unavailable(index);
            self.emit(&message, None);
            return;
        };

        let message = messages::level_selected(&level);
        self.selected = level.clone();
        self.state = SessionState::menu(level);
        self.emit(&message, Some(Cue::Select));
    }

    /// Validate a custom grid and make it the selected level.
    ///
    /// Dimensions are clamped into range first. Returns whether the grid was
    /// accepted; a rejected grid is announced and changes nothing.
    pub fn submit_custom_level(&mut self, rows: i64, cols: i64) -> bool {
        if self.state.phase.is_playing() {
            self.emit(messages::LEAVE_GAME_FIRST, None);
            return false;
        }
        match LevelSpec::custom(rows, cols) {
            Ok(level) => {
                debug!(rows = level.rows, cols = level.cols, "custom level accepted");
                let message = messages::custom_level_created(&level);
                self.selected = level.clone();
                self.state = SessionState::menu(level);
                self.emit(&message, Some(Cue::Select));
                true
            }
            Err(err) => {
                debug!(%err, "custom level rejected");
                self.emit(messages::CUSTOM_LEVEL_ODD, None);
                false
            }
        }
    }

    // === Play ===

    /// Move the cursor one cell, clamped to the grid.
    ///
    /// Does nothing outside a game. Works during a resolution window.
    pub fn move_cursor(&mut self, direction: Direction) {
        if !self.state.phase.is_playing() {
            return;
        }

        let from = self.state.cursor;
        let to = from.step(direction, self.state.level.rows, self.state.level.cols);
        self.state.cursor = to;
        trace!(?direction, %to, "cursor");

        let message = self.position_announcement(to);
        let cue = (to != from).then_some(Cue::Move);
        self.emit(&message, cue);
    }

    /// Turn over the card under the cursor.
    ///
    /// Rejected (announced, nothing changes) outside `Selecting`, on a
    /// face-up or matched card, or with two cards already face-up.
    pub fn select_at_cursor(&mut self) {
        if !self.state.phase.accepts_selection() || self.state.selection.len() >= 2 {
            return self.reject_selection();
        }

        let selectable = self
            .state
            .card_at_cursor()
            .is_some_and(|card| card.is_selectable());
        if !selectable {
            return self.reject_selection();
        }
        let index = self.state.cursor.index(self.state.level.cols);
        let Some(card) = self.state.cards.get_mut(index) else {
            return self.reject_selection();
        };

        card.reveal();
        let (id, card_id) = (card.id, card.card_id);
        self.state.selection.push(id);
        self.state.moves += 1;
        trace!(%id, at = %self.state.cursor, "revealed");

        let message = messages::card_revealed(self.label(card_id));
        self.emit(&message, Some(Cue::CardFlip));

        if self.state.selection.len() == 2 {
            self.schedule_resolution();
        }
    }

    /// Pointer activation: move the cursor to `at`, then select.
    pub fn select_cell(&mut self, at: Position) {
        if !self.state.phase.is_playing() {
            return self.reject_selection();
        }
        if !at.within(self.state.level.rows, self.state.level.cols) {
            self.emit(messages::OUTSIDE_GRID, None);
            return;
        }
        self.state.cursor = at;
        self.select_at_cursor();
    }

    // === Time ===

    /// Engine clock time of the next scheduled resolution, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.phase.deadline()
    }

    /// How long until the next scheduled resolution, if any.
    #[must_use]
    pub fn time_until_deadline(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.clock))
    }

    /// Advance the engine clock and fire every resolution that falls due.
    ///
    /// A single large step fires a final match and the completion after it.
    pub fn advance(&mut self, elapsed: Duration) {
        self.clock = self.clock.saturating_add(elapsed);
        while let Some(deadline) = self.next_deadline() {
            if deadline > self.clock {
                break;
            }
            match self.state.phase {
                Phase::Playing(PlayState::Resolving(pending)) => self.resolve(pending),
                Phase::Playing(PlayState::Finishing { .. }) => self.complete(),
                _ => break,
            }
        }
    }

    // === Queries ===

    /// Sentence describing a grid cell and its card.
    #[must_use]
    pub fn position_announcement(&self, at: Position) -> String {
        let face = self
            .state
            .card_at(at)
            .map(|card| (card.face(), self.label(card.card_id)));
        messages::position(at, face)
    }

    /// One-line score summary: "Score: S | Moves: M | Pairs: P/T".
    #[must_use]
    pub fn status_line(&self) -> String {
        messages::status_line(
            self.state.score,
            self.state.moves,
            self.state.matched_pairs,
            self.state.total_pairs(),
        )
    }

    // === Internals ===

    fn schedule_resolution(&mut self) {
        let [first, second] = [self.state.selection[0], self.state.selection[1]];
        let pairs = match (self.state.card(first), self.state.card(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };
        let (outcome, delay) = if pairs {
            (Outcome::Match, self.config.match_delay())
        } else {
            (Outcome::Mismatch, self.config.mismatch_delay())
        };

        let pending = PendingResolution {
            cards: [first, second],
            outcome,
            deadline: self.clock.saturating_add(delay),
        };
        debug!(?outcome, %first, %second, deadline = ?pending.deadline, "resolution scheduled");
        self.state.phase = Phase::Playing(PlayState::Resolving(pending));
    }

    fn resolve(&mut self, pending: PendingResolution) {
        self.state.phase = Phase::Playing(PlayState::Selecting);
        self.state.selection.clear();

        match pending.outcome {
            Outcome::Match => {
                for id in pending.cards {
                    if let Some(card) = self.state.card_mut(id) {
                        card.mark_matched();
                    }
                }
                self.state.matched_pairs += 1;
                self.state.score += self.config.points_per_match;

                let found = self.state.matched_pairs;
                let total = self.state.total_pairs();
                let card_id = self.state.card(pending.cards[0]).map(|card| card.card_id);
                let (label, description) = match card_id.and_then(|id| self.pool.get(id)) {
                    Some(def) => (def.label.as_str(), def.description.as_str()),
                    None => (UNKNOWN_CARD, ""),
                };
                let message = messages::match_found(label, description, found, total);
                debug!(found, total, score = self.state.score, "pair matched");
                self.emit(&message, Some(Cue::Match));

                if found == total {
                    self.state.phase = Phase::Playing(PlayState::Finishing {
                        deadline: pending.deadline.saturating_add(self.config.completion_delay()),
                    });
                }
            }
            Outcome::Mismatch => {
                for id in pending.cards {
                    if let Some(card) = self.state.card_mut(id) {
                        card.conceal();
                    }
                }
                debug!("pair mismatched");
                self.emit(messages::NO_MATCH, Some(Cue::NoMatch));
            }
        }
    }

    fn complete(&mut self) {
        self.state.phase = Phase::Complete;
        debug!(
            moves = self.state.moves,
            score = self.state.score,
            "session complete"
        );
        let message = messages::completed(self.state.moves, self.state.score);
        self.emit(&message, Some(Cue::Victory));
    }

    fn reject_selection(&mut self) {
        trace!(phase = ?self.state.phase, "selection rejected");
        self.emit(messages::CANNOT_SELECT, None);
    }

    fn label(&self, card_id: CardId) -> &str {
        self.pool
            .get(card_id)
            .map_or(UNKNOWN_CARD, |def| def.label.as_str())
    }

    fn emit(&mut self, message: &str, cue: Option<Cue>) {
        let cue = cue.filter(|_| self.config.sound_enabled);
        self.sink.announce(message, cue);
    }
}

const UNKNOWN_CARD: &str = "Unknown card";

fn first_level(catalog: &LevelCatalog) -> LevelSpec {
    catalog
        .get(0)
        .cloned()
        .unwrap_or_else(|| LevelSpec::new("Beginner", 2, 2))
}
