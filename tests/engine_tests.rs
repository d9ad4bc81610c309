//! End-to-end session tests for the game-state engine.
//!
//! Decks are dealt with `IdentityEntropy`, so a two-definition pool on a
//! 1x4 or 2x2 grid always lays out as [A, B, A, B].

use std::time::Duration;

use memory_pairs::{
    CardDefinition, CardFace, CardId, CardPool, Cue, Direction, EngineConfig, GameEngine,
    IdentityEntropy, InputEvent, LevelCatalog, LevelSpec, PairsError, Phase, PlayState, Position,
    RecordingSink,
};

type TestEngine = GameEngine<RecordingSink, IdentityEntropy>;

fn ab_pool() -> CardPool {
    [
        CardDefinition::new(CardId::new(0), "Lion").with_description("Lions roar loudly"),
        CardDefinition::new(CardId::new(1), "Owl").with_description("Owls fly silently"),
    ]
    .into_iter()
    .collect()
}

/// Engine in the menu with Beginner (2x2) selected.
fn engine() -> TestEngine {
    GameEngine::with_entropy(EngineConfig::default(), RecordingSink::new(), IdentityEntropy)
        .with_pool(ab_pool())
}

fn started() -> TestEngine {
    let mut engine = engine();
    engine.start().unwrap();
    engine.sink_mut().drain();
    engine
}

fn face_at(engine: &TestEngine, row: usize, col: usize) -> CardFace {
    engine.state().card_at(Position::new(row, col)).unwrap().face()
}

// Grid for the 2x2 deal:
//   Lion Owl
//   Lion Owl

#[test]
fn test_start_announces_session() {
    let mut engine = engine();
    engine.handle(InputEvent::Start).unwrap();

    assert_eq!(engine.state().phase(), Phase::Playing(PlayState::Selecting));
    assert_eq!(engine.state().cards().len(), 4);
    assert_eq!(engine.state().cursor(), Position::origin());
    assert_eq!(
        engine.sink().last_message(),
        Some("Game started! Beginner level. 4 cards, 2 pairs to find. Navigate with arrow keys. Current position: Row 1, Column 1")
    );
}

#[test]
fn test_mismatch_flips_cards_back() {
    let mut engine = started();

    engine.handle(InputEvent::Select).unwrap();
    engine.handle(InputEvent::Move(Direction::Right)).unwrap();
    engine.handle(InputEvent::Select).unwrap();

    assert_eq!(face_at(&engine, 0, 0), CardFace::Showing);
    assert_eq!(face_at(&engine, 0, 1), CardFace::Showing);
    assert!(engine.state().phase().is_resolving());

    engine.advance(Duration::from_millis(1999));
    assert!(engine.state().phase().is_resolving());

    engine.advance(Duration::from_millis(1));
    assert_eq!(face_at(&engine, 0, 0), CardFace::Hidden);
    assert_eq!(face_at(&engine, 0, 1), CardFace::Hidden);
    assert_eq!(engine.state().moves(), 2);
    assert_eq!(engine.state().score(), 0);
    assert_eq!(engine.state().matched_pairs(), 0);
    assert!(engine.state().selection().is_empty());

    let last = engine.sink().last().unwrap();
    assert_eq!(last.message, "No match. Cards flipped back. Try again!");
    assert_eq!(last.cue, Some(Cue::NoMatch));
}

#[test]
fn test_match_scores_and_stays_face_up() {
    let mut engine = started();

    engine.select_at_cursor();
    engine.move_cursor(Direction::Down);
    engine.select_at_cursor();
    engine.advance(Duration::from_millis(1000));

    assert_eq!(face_at(&engine, 0, 0), CardFace::Matched);
    assert_eq!(face_at(&engine, 1, 0), CardFace::Matched);
    assert_eq!(engine.state().score(), 10);
    assert_eq!(engine.state().matched_pairs(), 1);
    assert_eq!(engine.state().phase(), Phase::Playing(PlayState::Selecting));

    let last = engine.sink().last().unwrap();
    assert_eq!(
        last.message,
        "Match found! Lion. Lions roar loudly. 1 pairs found out of 2."
    );
    assert_eq!(last.cue, Some(Cue::Match));
}

#[test]
fn test_full_game_completes() {
    let mut engine = started();

    engine.select_cell(Position::new(0, 0));
    engine.select_cell(Position::new(1, 0));
    engine.advance(Duration::from_secs(1));
    engine.select_cell(Position::new(0, 1));
    engine.select_cell(Position::new(1, 1));

    // Second match at t=2s, completion one second later
    engine.advance(Duration::from_secs(1));
    assert_eq!(engine.state().matched_pairs(), 2);
    assert!(matches!(
        engine.state().phase(),
        Phase::Playing(PlayState::Finishing { .. })
    ));

    engine.advance(Duration::from_secs(1));
    assert_eq!(engine.state().phase(), Phase::Complete);
    assert_eq!(engine.state().moves(), 4);
    assert_eq!(engine.state().score(), 20);

    let last = engine.sink().last().unwrap();
    assert_eq!(
        last.message,
        "Congratulations! Game completed in 4 moves. Final score: 20"
    );
    assert_eq!(last.cue, Some(Cue::Victory));
}

#[test]
fn test_one_large_step_fires_match_and_completion() {
    let mut engine = started();
    engine.select_cell(Position::new(0, 0));
    engine.select_cell(Position::new(1, 0));
    engine.advance(Duration::from_secs(1));
    engine.select_cell(Position::new(0, 1));
    engine.select_cell(Position::new(1, 1));

    engine.advance(Duration::from_secs(60));

    assert_eq!(engine.state().phase(), Phase::Complete);
    let cues: Vec<Cue> = engine.sink().cues().collect();
    assert_eq!(cues.last(), Some(&Cue::Victory));
    assert_eq!(cues[cues.len() - 2], Cue::Match);
}

#[test]
fn test_selecting_face_up_card_is_rejected() {
    let mut engine = started();
    engine.select_at_cursor();
    engine.select_at_cursor();

    assert_eq!(engine.state().moves(), 1);
    assert_eq!(engine.state().selection().len(), 1);
    assert_eq!(
        engine.sink().last_message(),
        Some("This card cannot be selected")
    );
}

#[test]
fn test_selecting_matched_card_is_rejected() {
    let mut engine = started();
    engine.select_cell(Position::new(0, 0));
    engine.select_cell(Position::new(1, 0));
    engine.advance(Duration::from_secs(1));

    let before = engine.snapshot();
    engine.select_cell(Position::new(0, 0));
    let after = engine.snapshot();

    assert_eq!(before.cards, after.cards);
    assert_eq!(before.moves, after.moves);
    assert!(after.selection.is_empty());
}

#[test]
fn test_third_selection_during_resolution_is_rejected() {
    let mut engine = started();
    engine.select_cell(Position::new(0, 0));
    engine.select_cell(Position::new(0, 1));
    engine.select_cell(Position::new(1, 0));

    assert_eq!(engine.state().moves(), 2);
    assert_eq!(face_at(&engine, 1, 0), CardFace::Hidden);
    // Cursor still follows the pointer
    assert_eq!(engine.state().cursor(), Position::new(1, 0));
}

#[test]
fn test_cursor_moves_during_resolution() {
    let mut engine = started();
    engine.select_at_cursor();
    engine.move_cursor(Direction::Right);
    engine.select_at_cursor();

    engine.move_cursor(Direction::Down);

    assert_eq!(engine.state().cursor(), Position::new(1, 1));
    let last = engine.sink().last().unwrap();
    assert_eq!(last.message, "Row 2, Column 2. Hidden card");
    assert_eq!(last.cue, Some(Cue::Move));
}

#[test]
fn test_cursor_clamps_at_edges() {
    let mut engine = started();

    engine.move_cursor(Direction::Up);
    engine.move_cursor(Direction::Left);
    assert_eq!(engine.state().cursor(), Position::origin());
    assert_eq!(engine.sink().last().unwrap().cue, None);

    for _ in 0..5 {
        engine.move_cursor(Direction::Right);
        engine.move_cursor(Direction::Down);
    }
    assert_eq!(engine.state().cursor(), Position::new(1, 1));
}

#[test]
fn test_position_announcement_reports_face() {
    let mut engine = started();
    engine.select_cell(Position::new(0, 0));
    engine.select_cell(Position::new(1, 0));
    engine.advance(Duration::from_secs(1));

    engine.move_cursor(Direction::Up);
    assert_eq!(
        engine.sink().last_message(),
        Some("Row 1, Column 1. Matched pair: Lion")
    );
}

#[test]
fn test_select_cell_outside_grid() {
    let mut engine = started();
    engine.handle(InputEvent::SelectCell(Position::new(5, 0))).unwrap();

    assert_eq!(engine.state().moves(), 0);
    assert_eq!(engine.state().cursor(), Position::origin());
    assert_eq!(
        engine.sink().last_message(),
        Some("That position is outside the grid")
    );
}

#[test]
fn test_duplicate_start_does_not_reshuffle() {
    let mut engine = started();
    engine.select_at_cursor();
    let before = engine.snapshot();

    engine.handle(InputEvent::Start).unwrap();

    assert_eq!(engine.snapshot(), before);
    // Only the reveal was announced
    assert_eq!(engine.sink().len(), 1);
}

#[test]
fn test_replay_after_completion_deals_fresh_game() {
    let mut engine = started();
    engine.select_cell(Position::new(0, 0));
    engine.select_cell(Position::new(1, 0));
    engine.advance(Duration::from_secs(1));
    engine.select_cell(Position::new(0, 1));
    engine.select_cell(Position::new(1, 1));
    engine.advance(Duration::from_secs(5));
    assert_eq!(engine.state().phase(), Phase::Complete);

    engine.handle(InputEvent::Start).unwrap();

    assert_eq!(engine.state().phase(), Phase::Playing(PlayState::Selecting));
    assert_eq!(engine.state().moves(), 0);
    assert_eq!(engine.state().score(), 0);
    assert_eq!(engine.state().matched_cards(), 0);
}

#[test]
fn test_abandon_discards_pending_resolution() {
    let mut engine = started();
    engine.select_cell(Position::new(0, 0));
    engine.select_cell(Position::new(1, 0));

    engine.handle(InputEvent::ReturnToMenu).unwrap();
    assert_eq!(engine.state().phase(), Phase::Menu);
    assert_eq!(engine.next_deadline(), None);
    assert_eq!(engine.sink().last_message(), Some("Returned to main menu"));

    // The stale deadline never fires
    engine.sink_mut().drain();
    engine.advance(Duration::from_secs(10));
    assert!(engine.sink().is_empty());
    assert_eq!(engine.state().score(), 0);
}

#[test]
fn test_choose_level_selects_in_menu() {
    let mut engine = engine();
    engine.handle(InputEvent::ChooseLevel(2)).unwrap();

    assert_eq!(engine.selected_level().name, "Intermediate");
    assert_eq!(engine.state().phase(), Phase::Menu);
    let last = engine.sink().last().unwrap();
    assert_eq!(
        last.message,
        "Intermediate level selected. 3 rows, 4 columns - 12 cards total"
    );
    assert_eq!(last.cue, Some(Cue::Select));
}

#[test]
fn test_choose_missing_level() {
    let mut engine = engine();
    engine.choose_level(99);

    assert_eq!(engine.selected_level().name, "Beginner");
    assert_eq!(engine.sink().last_message(), Some("Level 100 is not available"));
}

#[test]
fn test_choose_level_at_max_index_is_soft_rejection() {
    let mut engine = engine();
    engine.handle(InputEvent::ChooseLevel(usize::MAX)).unwrap();

    assert_eq!(engine.selected_level().name, "Beginner");
    assert_eq!(
        engine.sink().last_message(),
        Some(format!("Level {} is not available", usize::MAX).as_str())
    );
}

#[test]
fn test_level_change_blocked_while_playing() {
    let mut engine = started();
    engine.choose_level(1);
    assert!(!engine.submit_custom_level(4, 4));

    assert_eq!(engine.state().level().name, "Beginner");
    assert!(engine.state().phase().is_playing());
    assert_eq!(
        engine.sink().last_message(),
        Some("Return to the main menu to change level")
    );
}

#[test]
fn test_custom_level_clamps_dimensions() {
    let mut engine = GameEngine::new(EngineConfig::default(), RecordingSink::new(), 5);
    engine
        .handle(InputEvent::SubmitCustomLevel { rows: 1, cols: 15 })
        .unwrap();

    let level = engine.selected_level();
    assert_eq!((level.rows, level.cols), (2, 10));
    assert_eq!(
        engine.sink().last_message(),
        Some("Custom level created: 2 rows by 10 columns, 20 cards total")
    );

    engine.start().unwrap();
    assert_eq!(engine.state().cards().len(), 20);
    assert_eq!(engine.state().level().name, "Custom");
}

#[test]
fn test_custom_level_rejects_odd_grid() {
    let mut engine = engine();
    assert!(!engine.submit_custom_level(3, 3));

    assert_eq!(engine.selected_level().name, "Beginner");
    assert_eq!(
        engine.sink().last_message(),
        Some("Total number of cards must be even")
    );
}

#[test]
fn test_largest_custom_grid_is_playable() {
    let mut engine = GameEngine::new(EngineConfig::default(), RecordingSink::new(), 9);
    assert!(engine.submit_custom_level(10, 10));
    engine.start().unwrap();
    assert_eq!(engine.state().total_pairs(), 50);
}

#[test]
fn test_start_fails_when_pool_too_small() {
    let mut engine = engine();
    engine.choose_level(2);

    let err = engine.start().unwrap_err();
    assert_eq!(
        err,
        PairsError::PoolTooSmall {
            needed: 6,
            available: 2
        }
    );
    assert_eq!(engine.state().phase(), Phase::Menu);
}

#[test]
fn test_start_session_rejects_odd_level() {
    let mut engine = engine();
    let err = engine
        .start_session(&LevelSpec::new("Odd", 1, 3))
        .unwrap_err();
    assert!(matches!(err, PairsError::InvalidLevel { .. }));
    assert_eq!(engine.state().phase(), Phase::Menu);
}

#[test]
fn test_start_session_rejects_oversized_level() {
    let mut engine = engine();
    let err = engine
        .start_session(&LevelSpec::new("Huge", usize::MAX, 2))
        .unwrap_err();
    assert!(matches!(err, PairsError::InvalidLevel { .. }));
    assert_eq!(engine.state().phase(), Phase::Menu);
}

#[test]
fn test_position_announcement_far_outside_grid() {
    let engine = started();
    assert_eq!(
        engine.position_announcement(Position::new(usize::MAX, 0)),
        format!("Row {}, Column 1", usize::MAX)
    );
}

#[test]
fn test_custom_catalog() {
    let catalog = LevelCatalog::new(vec![LevelSpec::new("Strip", 1, 4)]);
    let mut engine = engine().with_catalog(catalog);
    assert_eq!(engine.selected_level().name, "Strip");

    engine.start().unwrap();
    assert_eq!(engine.state().cards().len(), 4);
}

#[test]
fn test_status_line() {
    let mut engine = started();
    engine.select_cell(Position::new(0, 0));
    engine.select_cell(Position::new(1, 0));
    engine.advance(Duration::from_secs(1));
    engine.select_cell(Position::new(0, 1));

    assert_eq!(engine.status_line(), "Score: 10 | Moves: 3 | Pairs: 1/2");
}

#[test]
fn test_custom_delays() {
    let config = EngineConfig::default()
        .with_match_delay(Duration::from_millis(100))
        .with_mismatch_delay(Duration::from_millis(300))
        .with_points_per_match(5);
    let mut engine = GameEngine::with_entropy(config, RecordingSink::new(), IdentityEntropy)
        .with_pool(ab_pool());
    engine.start().unwrap();

    engine.select_cell(Position::new(0, 0));
    engine.select_cell(Position::new(0, 1));
    assert_eq!(engine.time_until_deadline(), Some(Duration::from_millis(300)));
    engine.advance(Duration::from_millis(300));

    engine.select_cell(Position::new(0, 0));
    engine.select_cell(Position::new(1, 0));
    assert_eq!(engine.time_until_deadline(), Some(Duration::from_millis(100)));
    engine.advance(Duration::from_millis(100));
    assert_eq!(engine.state().score(), 5);
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = started();
    engine.select_at_cursor();

    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    let back: memory_pairs::SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, engine.snapshot());
}
