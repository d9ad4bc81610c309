//! Levels: grid dimensions and the library of built-in levels.
//!
//! A level is a named `rows x cols` grid. Its cell count must be even so
//! the cards pair up. Library levels are fixed; custom levels are clamped
//! into `[MIN_DIMENSION, MAX_DIMENSION]` per axis and then rejected if the
//! clamped grid still has an odd number of cells.

use serde::{Deserialize, Serialize};

use crate::core::{PairsError, Result};

/// Smallest accepted custom grid dimension.
pub const MIN_DIMENSION: usize = 2;
/// Largest accepted custom grid dimension.
pub const MAX_DIMENSION: usize = 10;

/// A playable grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Display name ("Beginner").
    pub name: String,

    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Sentence read out on the level picker.
    pub description: String,
}

impl LevelSpec {
    /// Create a level with a generated description.
    #[must_use]
    pub fn new(name: impl Into<String>, rows: usize, cols: usize) -> Self {
        let description = format!(
            "{} rows, {} columns - {} cards total",
            rows,
            cols,
            rows.saturating_mul(cols)
        );
        Self {
            name: name.into(),
            rows,
            cols,
            description,
        }
    }

    /// Build a custom level from raw user input.
    ///
    /// Each axis is clamped into `[MIN_DIMENSION, MAX_DIMENSION]`; a clamped
    /// grid with an odd cell count is rejected.
    ///
    /// ```
    /// use memory_pairs::levels::LevelSpec;
    ///
    /// let level = LevelSpec::custom(1, 3).unwrap();
    /// assert_eq!((level.rows, level.cols), (2, 3));
    ///
    /// assert!(LevelSpec::custom(3, 3).is_err());
    /// ```
    pub fn custom(rows: i64, cols: i64) -> Result<Self> {
        let rows = clamp_dimension(rows);
        let cols = clamp_dimension(cols);
        if (rows * cols) % 2 != 0 {
            return Err(PairsError::OddCellCount { rows, cols });
        }
        Ok(Self::new("Custom", rows, cols))
    }

    /// Total number of cards.
    ///
    /// Saturates at `usize::MAX`; `validate` rejects grids that large.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Number of pairs to find.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cell_count() / 2
    }

    /// Check that the level can be dealt as pairs.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(PairsError::invalid_level(format!(
                "{} level has an empty {}x{} grid",
                self.name, self.rows, self.cols
            )));
        }
        let Some(cells) = self.rows.checked_mul(self.cols) else {
            return Err(PairsError::invalid_level(format!(
                "{} level has a {}x{} grid, too large to deal",
                self.name, self.rows, self.cols
            )));
        };
        if cells % 2 != 0 {
            return Err(PairsError::invalid_level(format!(
                "{} level has {} cells, which cannot be split into pairs",
                self.name, cells
            )));
        }
        Ok(())
    }
}

fn clamp_dimension(value: i64) -> usize {
    let clamped = value.clamp(MIN_DIMENSION as i64, MAX_DIMENSION as i64);
    // In range after clamping.
    clamped as usize
}

/// Ordered list of built-in levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelCatalog {
    levels: Vec<LevelSpec>,
}

impl LevelCatalog {
    /// Create a catalog from an explicit list.
    #[must_use]
    pub fn new(levels: Vec<LevelSpec>) -> Self {
        Self { levels }
    }

    /// The six library levels, easiest first.
    #[must_use]
    pub fn library() -> Self {
        Self::new(vec![
            LevelSpec::new("Beginner", 2, 2),
            LevelSpec::new("Easy", 2, 3),
            LevelSpec::new("Intermediate", 3, 4),
            LevelSpec::new("Advanced", 4, 4),
            LevelSpec::new("Expert", 4, 5),
            LevelSpec::new("Master", 5, 6),
        ])
    }

    /// Get a level by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LevelSpec> {
        self.levels.get(index)
    }

    /// Index of the level with this name (case-insensitive).
    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        self.levels
            .iter()
            .position(|l| l.name.eq_ignore_ascii_case(name))
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate over levels in order.
    pub fn iter(&self) -> impl Iterator<Item = &LevelSpec> {
        self.levels.iter()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::library()
    }
}
