//! Deck builder.
//!
//! Deals a session's cards: the first `cells / 2` definitions of the pool,
//! each twice, shuffled with [`fisher_yates`]. Instance ids are assigned in
//! dealing order before the shuffle, so they stay unique but say nothing
//! about grid position.

use tracing::debug;

use crate::cards::{CardDefinition, CardInstance, InstanceId};
use crate::core::{fisher_yates, Entropy, PairsError, Result};

/// Build a shuffled deck for a grid of `total_cells` cards.
///
/// ## Errors
///
/// `InvalidLevel` if `total_cells` is zero or odd, `PoolTooSmall` if `pool`
/// holds fewer than `total_cells / 2` definitions.
///
/// ## Example
///
/// ```
/// use memory_pairs::cards::CardPool;
/// use memory_pairs::core::GameRng;
/// use memory_pairs::deck::build_deck;
///
/// let pool = CardPool::standard();
/// let deck = build_deck(12, pool.definitions(), &mut GameRng::new(7)).unwrap();
/// assert_eq!(deck.len(), 12);
/// ```
pub fn build_deck<E: Entropy + ?Sized>(
    total_cells: usize,
    pool: &[CardDefinition],
    entropy: &mut E,
) -> Result<Vec<CardInstance>> {
    if total_cells == 0 || total_cells % 2 != 0 {
        return Err(PairsError::invalid_level(format!(
            "a deck needs a positive, even number of cards, got {}",
            total_cells
        )));
    }

    let pairs = total_cells / 2;
    if pairs > pool.len() {
        return Err(PairsError::PoolTooSmall {
            needed: pairs,
            available: pool.len(),
        });
    }

    let selected = &pool[..pairs];
    let mut deck: Vec<CardInstance> = selected
        .iter()
        .chain(selected.iter())
        .enumerate()
        .map(|(i, def)| CardInstance::new(InstanceId::new(i as u32), def.id))
        .collect();

    fisher_yates(&mut deck, entropy);

    debug!(cards = total_cells, pairs, "dealt deck");
    Ok(deck)
}
