//! The card pool: ordered card definitions with lookup by id.
//!
//! Pool order is significant. The deck builder deals from the front, so the
//! first definitions are the ones children meet on the smallest levels.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};

/// Ordered registry of card definitions.
///
/// ## Example
///
/// ```
/// use memory_pairs::cards::CardPool;
///
/// let mut pool = CardPool::new();
/// let lion = pool.register_auto("Lion", "King of animals", "🦁");
/// let owl = pool.register_auto("Owl", "Hunts at night", "🦉");
///
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.get(owl).unwrap().label, "Owl");
/// assert_eq!(pool.definitions()[0].id, lion);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardId, usize>,
    next_id: u32,
}

impl CardPool {
    /// Create a new empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.index.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.next_id = self.next_id.max(card.id.raw().saturating_add(1));
        self.index.insert(card.id, self.cards.len());
        self.cards.push(card);
    }

    /// Append a card with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(
        &mut self,
        label: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> CardId {
        let id = CardId::new(self.next_id);
        let card = CardDefinition::new(id, label)
            .with_description(description)
            .with_icon(icon);
        self.register(card);
        id
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All definitions in pool order.
    #[must_use]
    pub fn definitions(&self) -> &[CardDefinition] {
        &self.cards
    }

    /// Iterate over definitions in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}

impl FromIterator<CardDefinition> for CardPool {
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        let mut pool = CardPool::new();
        for card in iter {
            pool.register(card);
        }
        pool
    }
}
