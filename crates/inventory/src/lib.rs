//! Inventory domain module.
//!
//! This crate contains business rules for inventory items, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod query;
pub mod seed;

pub use item::{Category, Item, ItemPatch};
pub use query::ItemQuery;
pub use seed::seed_items;
