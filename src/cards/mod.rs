//! Card system: definitions, instances, and the card pool.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions (what a pair shares)
//! - `CardDefinition`: Static card content (label, description, icon)
//! - `InstanceId`: Identifier for one card on the grid
//! - `CardInstance`: Runtime card state (flipped, matched)
//! - `CardPool`: Ordered definitions the deck builder deals from

mod animals;
pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardId};
pub use instance::{CardFace, CardInstance, InstanceId};
pub use registry::CardPool;
