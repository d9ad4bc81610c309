//! Card definitions - static card content.
//!
//! `CardDefinition` holds what a card shows once revealed: the animal's
//! name, a sentence read aloud on a match, and an icon for sighted players.
//!
//! Per-session state (face-up, matched) lives in `CardInstance`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Two instances are a pair exactly when they share a `CardId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card content.
///
/// ## Example
///
/// ```
/// use memory_pairs::cards::{CardDefinition, CardId};
///
/// let lion = CardDefinition::new(CardId::new(0), "Lion")
///     .with_description("The lion is the king of animals")
///     .with_icon("🦁");
///
/// assert_eq!(lion.label, "Lion");
/// assert_eq!(lion.icon, "🦁");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this definition.
    pub id: CardId,

    /// Name announced when the card is revealed.
    pub label: String,

    /// Sentence announced when the pair is matched.
    pub description: String,

    /// Pictogram for the visual grid.
    pub icon: String,
}

impl CardDefinition {
    /// Create a definition with an empty description and icon.
    #[must_use]
    pub fn new(id: CardId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            description: String::new(),
            icon: String::new(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon (builder pattern).
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}
