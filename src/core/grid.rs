//! Grid coordinates and cursor movement.
//!
//! Cards are stored row-major: the card at `(row, col)` lives at index
//! `row * cols + col`. Positions are zero-based internally and announced
//! one-based ("Row 1, Column 1").

use serde::{Deserialize, Serialize};

/// A cell on the card grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The top-left cell, where every session starts.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Row-major index in a grid `cols` wide.
    #[must_use]
    pub const fn index(self, cols: usize) -> usize {
        self.row.saturating_mul(cols).saturating_add(self.col)
    }

    /// Check if this position lies inside a `rows` x `cols` grid.
    #[must_use]
    pub const fn within(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// Step one cell in `direction`, clamped to the grid.
    ///
    /// Moving past an edge leaves that axis unchanged; there is no wrap.
    #[must_use]
    pub fn step(self, direction: Direction, rows: usize, cols: usize) -> Self {
        let max_row = rows.saturating_sub(1);
        let max_col = cols.saturating_sub(1);
        match direction {
            Direction::Up => Self::new(self.row.saturating_sub(1), self.col),
            Direction::Down => Self::new(self.row.saturating_add(1).min(max_row), self.col),
            Direction::Left => Self::new(self.row, self.col.saturating_sub(1)),
            Direction::Right => Self::new(self.row, self.col.saturating_add(1).min(max_col)),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Row {}, Column {}",
            self.row.saturating_add(1),
            self.col.saturating_add(1)
        )
    }
}

/// Cursor movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(Position::origin().index(5), 0);
        assert_eq!(Position::new(0, 4).index(5), 4);
        assert_eq!(Position::new(1, 0).index(5), 5);
        assert_eq!(Position::new(2, 3).index(5), 13);
        assert_eq!(Position::new(usize::MAX, 0).index(2), usize::MAX);
    }

    #[test]
    fn test_step_clamps_at_edges() {
        let origin = Position::origin();
        assert_eq!(origin.step(Direction::Up, 3, 4), origin);
        assert_eq!(origin.step(Direction::Left, 3, 4), origin);

        let corner = Position::new(2, 3);
        assert_eq!(corner.step(Direction::Down, 3, 4), corner);
        assert_eq!(corner.step(Direction::Right, 3, 4), corner);
    }

    #[test]
    fn test_step_moves_one_cell() {
        let p = Position::new(1, 1);
        assert_eq!(p.step(Direction::Up, 3, 3), Position::new(0, 1));
        assert_eq!(p.step(Direction::Down, 3, 3), Position::new(2, 1));
        assert_eq!(p.step(Direction::Left, 3, 3), Position::new(1, 0));
        assert_eq!(p.step(Direction::Right, 3, 3), Position::new(1, 2));
    }

    #[test]
    fn test_within() {
        assert!(Position::new(1, 2).within(2, 3));
        assert!(!Position::new(2, 0).within(2, 3));
        assert!(!Position::new(0, 3).within(2, 3));
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::origin().to_string(), "Row 1, Column 1");
        assert_eq!(Position::new(2, 4).to_string(), "Row 3, Column 5");
    }

    #[test]
    fn test_display_saturates_at_max() {
        let far = Position::new(usize::MAX, 0);
        assert_eq!(far.to_string(), format!("Row {}, Column 1", usize::MAX));
    }

    #[test]
    fn test_step_at_max_does_not_overflow() {
        let far = Position::new(usize::MAX, usize::MAX);
        assert_eq!(far.step(Direction::Down, usize::MAX, usize::MAX), far);
        assert_eq!(far.step(Direction::Right, usize::MAX, usize::MAX), far);
    }
}
