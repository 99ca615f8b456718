//! Item storage abstractions.

pub mod error;
pub mod memory;

use std::collections::BTreeMap;
use std::sync::Arc;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, ItemPatch, ItemQuery};

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryItemStore;

/// Keyed item storage.
///
/// The API only talks to this trait, so a persistent backend can replace the
/// in-memory one without touching handlers.
pub trait ItemStore: Send + Sync {
    /// Every stored item keyed by id, in id order.
    fn list(&self) -> StoreResult<BTreeMap<ItemId, Item>>;

    /// Fails with `NotFound` if `id` is absent.
    fn get(&self, id: ItemId) -> StoreResult<Item>;

    /// Items matching every set field of `query`, in id order.
    fn query(&self, query: &ItemQuery) -> StoreResult<Vec<Item>>;

    /// Fails with `Conflict` if the id is already taken.
    fn create(&self, item: Item) -> StoreResult<Item>;

    /// Fails with `NotFound` before looking at the patch; an empty patch is
    /// then rejected with `InvalidArgument`.
    fn update(&self, id: ItemId, patch: ItemPatch) -> StoreResult<Item>;

    /// Returns the removed item.
    fn delete(&self, id: ItemId) -> StoreResult<Item>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn list(&self) -> StoreResult<BTreeMap<ItemId, Item>> {
        (**self).list()
    }

    fn get(&self, id: ItemId) -> StoreResult<Item> {
        (**self).get(id)
    }

    fn query(&self, query: &ItemQuery) -> StoreResult<Vec<Item>> {
        (**self).query(query)
    }

    fn create(&self, item: Item) -> StoreResult<Item> {
        (**self).create(item)
    }

    fn update(&self, id: ItemId, patch: ItemPatch) -> StoreResult<Item> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: ItemId) -> StoreResult<Item> {
        (**self).delete(id)
    }
}
