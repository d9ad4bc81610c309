//! Input contract between a front end and the engine.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, Position};

/// A discrete user intent, already translated from keys or pointer clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Arrow key.
    Move(Direction),
    /// Enter or Space on the cursor cell.
    Select,
    /// Pointer activation of a grid cell.
    SelectCell(Position),
    /// Start the selected level, or play it again.
    Start,
    /// Leave the current game.
    ReturnToMenu,
    /// Pick a library level by index.
    ChooseLevel(usize),
    /// Custom grid dialog submission, before clamping.
    SubmitCustomLevel {
        rows: i64,
        cols: i64,
    },
}
