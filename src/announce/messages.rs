//! Announcement wording.
//!
//! Every sentence a screen reader hears comes from here, so the engine's
//! control flow never carries string formatting.

use crate::cards::CardFace;
use crate::core::Position;
use crate::levels::LevelSpec;

pub(crate) const CANNOT_SELECT: &str = "This card cannot be selected";
pub(crate) const NO_MATCH: &str = "No match. Cards flipped back. Try again!";
pub(crate) const RETURNED_TO_MENU: &str = "Returned to main menu";
pub(crate) const OUTSIDE_GRID: &str = "That position is outside the grid";
pub(crate) const LEAVE_GAME_FIRST: &str = "Return to the main menu to change level";

pub(crate) fn session_started(level: &LevelSpec, start: Position) -> String {
    format!(
        "Game started! {} level. {} cards, {} pairs to find. Navigate with arrow keys. Current position: {}",
        level.name,
        level.cell_count(),
        level.pair_count(),
        start
    )
}

pub(crate) fn position(at: Position, face: Option<(CardFace, &str)>) -> String {
    match face {
        Some((CardFace::Matched, label)) => format!("{}. Matched pair: {}", at, label),
        Some((CardFace::Showing, label)) => format!("{}. Currently showing: {}", at, label),
        Some((CardFace::Hidden, _)) => format!("{}. Hidden card", at),
        None => at.to_string(),
    }
}

pub(crate) fn card_revealed(label: &str) -> String {
    format!("Card revealed: {}", label)
}

pub(crate) fn match_found(label: &str, description: &str, found: usize, total: usize) -> String {
    format!(
        "Match found! {}. {}. {} pairs found out of {}.",
        label, description, found, total
    )
}

pub(crate) fn completed(moves: u32, score: u32) -> String {
    format!(
        "Congratulations! Game completed in {} moves. Final score: {}",
        moves, score
    )
}

pub(crate) fn level_selected(level: &LevelSpec) -> String {
    format!("{} level selected. {}", level.name, level.description)
}

pub(crate) fn level_unavailable(index: usize) -> String {
    format!("Level {} is not available", index.saturating_add(1))
}

pub(crate) fn custom_level_created(level: &LevelSpec) -> String {
    format!(
        "Custom level created: {} rows by {} columns, {} cards total",
        level.rows,
        level.cols,
        level.cell_count()
    )
}

pub(crate) const CUSTOM_LEVEL_ODD: &str = "Total number of cards must be even";

pub(crate) fn status_line(score: u32, moves: u32, found: usize, total: usize) -> String {
    format!(
        "Score: {} | Moves: {} | Pairs: {}/{}",
        score, moves, found, total
    )
}
