use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_core::{DomainError, ItemId};
use stockroom_inventory::{Item, ItemPatch, ItemQuery, seed_items};

use super::{ItemStore, StoreError, StoreResult};

/// In-memory item store for dev/tests. Contents are lost on restart.
#[derive(Debug)]
pub struct InMemoryItemStore {
    inner: RwLock<BTreeMap<ItemId, Item>>,
}

impl InMemoryItemStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    /// Store pre-populated with the seed records.
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }

    /// Later items overwrite earlier ones with the same id.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            inner: RwLock::new(items.into_iter().map(|i| (i.id, i)).collect()),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, BTreeMap<ItemId, Item>>> {
        self.inner
            .read()
            .map_err(|_| StoreError::unavailable("item map lock poisoned"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, BTreeMap<ItemId, Item>>> {
        self.inner
            .write()
            .map_err(|_| StoreError::unavailable("item map lock poisoned"))
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn list(&self) -> StoreResult<BTreeMap<ItemId, Item>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: ItemId) -> StoreResult<Item> {
        self.read()?
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(id).into())
    }

    fn query(&self, query: &ItemQuery) -> StoreResult<Vec<Item>> {
        let map = self.read()?;
        Ok(map.values().filter(|item| query.matches(item)).cloned().collect())
    }

    fn create(&self, item: Item) -> StoreResult<Item> {
        let mut map = self.write()?;
        match map.entry(item.id) {
            Entry::Occupied(_) => Err(DomainError::conflict(item.id).into()),
            Entry::Vacant(slot) => {
                tracing::info!(item_id = %item.id, "item created");
                Ok(slot.insert(item).clone())
            }
        }
    }

    fn update(&self, id: ItemId, patch: ItemPatch) -> StoreResult<Item> {
        let mut map = self.write()?;
        let item = map.get_mut(&id).ok_or(DomainError::not_found(id))?;
        item.apply_patch(patch)?;
        tracing::info!(item_id = %id, "item updated");
        Ok(item.clone())
    }

    fn delete(&self, id: ItemId) -> StoreResult<Item> {
        let removed = self
            .write()?
            .remove(&id)
            .ok_or(DomainError::not_found(id))?;
        tracing::info!(item_id = %id, "item deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::Category;

    fn id(v: i64) -> ItemId {
        ItemId::new(v)
    }

    fn wrench(v: i64) -> Item {
        Item::new(id(v), "Wrench", 7.5, 4, Category::Tools)
    }

    #[test]
    fn seeded_store_holds_three_records() {
        let store = InMemoryItemStore::seeded();
        let all = store.list().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[&id(2)].name, "Nails");
    }

    #[test]
    fn new_store_is_empty() {
        assert!(InMemoryItemStore::new().list().unwrap().is_empty());
    }

    #[test]
    fn get_existing_and_missing() {
        let store = InMemoryItemStore::seeded();
        assert_eq!(store.get(id(0)).unwrap().name, "Hammer");
        assert_eq!(
            store.get(id(99)).unwrap_err(),
            StoreError::Domain(DomainError::NotFound(id(99)))
        );
    }

    #[test]
    fn query_without_filters_returns_all_items() {
        let store = InMemoryItemStore::seeded();
        let selection = store.query(&ItemQuery::default()).unwrap();
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn query_by_category_returns_only_that_category() {
        let store = InMemoryItemStore::seeded();
        let selection = store
            .query(&ItemQuery {
                category: Some(Category::Tools),
                ..ItemQuery::default()
            })
            .unwrap();

        let names: Vec<&str> = selection.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Hammer", "Pliers"]);
        assert!(selection.iter().all(|i| i.category == Category::Tools));
    }

    #[test]
    fn query_with_no_match_is_empty() {
        let store = InMemoryItemStore::seeded();
        let selection = store
            .query(&ItemQuery {
                count: Some(20),
                category: Some(Category::Consumables),
                ..ItemQuery::default()
            })
            .unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn create_new_item_appears_in_list() {
        let store = InMemoryItemStore::seeded();
        let created = store.create(wrench(3)).unwrap();
        assert_eq!(created, wrench(3));
        assert_eq!(store.list().unwrap().get(&id(3)), Some(&wrench(3)));
    }

    #[test]
    fn create_duplicate_id_conflicts_and_keeps_original() {
        let store = InMemoryItemStore::seeded();
        let err = store.create(wrench(0)).unwrap_err();
        assert_eq!(err, StoreError::Domain(DomainError::Conflict(id(0))));
        assert_eq!(store.get(id(0)).unwrap().name, "Hammer");
    }

    #[test]
    fn update_missing_id_is_not_found_even_with_empty_patch() {
        let store = InMemoryItemStore::seeded();
        let err = store.update(id(42), ItemPatch::default()).unwrap_err();
        assert_eq!(err, StoreError::Domain(DomainError::NotFound(id(42))));
    }

    #[test]
    fn update_without_fields_is_invalid() {
        let store = InMemoryItemStore::seeded();
        let err = store.update(id(1), ItemPatch::default()).unwrap_err();
        match err {
            StoreError::Domain(DomainError::InvalidArgument(_)) => {}
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn update_single_field_leaves_others_unchanged() {
        let store = InMemoryItemStore::seeded();
        let before = store.get(id(1)).unwrap();

        let updated = store
            .update(
                id(1),
                ItemPatch {
                    price: Some(5.49),
                    ..ItemPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.price, 5.49);
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.count, before.count);
        assert_eq!(updated.category, before.category);
        assert_eq!(store.get(id(1)).unwrap(), updated);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let store = InMemoryItemStore::seeded();
        let removed = store.delete(id(2)).unwrap();
        assert_eq!(removed.name, "Nails");
        assert!(matches!(
            store.get(id(2)),
            Err(StoreError::Domain(DomainError::NotFound(_)))
        ));
        assert!(matches!(
            store.delete(id(2)),
            Err(StoreError::Domain(DomainError::NotFound(_)))
        ));
    }

    #[test]
    fn list_is_ordered_by_id() {
        let store = InMemoryItemStore::with_items(vec![wrench(10), wrench(-1), wrench(4)]);
        let ids: Vec<i64> = store.list().unwrap().keys().map(|k| k.get()).collect();
        assert_eq!(ids, vec![-1, 4, 10]);
    }

    #[test]
    fn poisoned_lock_makes_store_unavailable() {
        let store = std::sync::Arc::new(InMemoryItemStore::seeded());

        let writer = store.clone();
        let panicked = std::thread::spawn(move || {
            let _guard = writer.inner.write().unwrap();
            panic!("writer died while holding the lock");
        })
        .join();
        assert!(panicked.is_err());

        assert!(matches!(store.get(id(0)), Err(StoreError::Unavailable(_))));
        assert!(matches!(store.list(), Err(StoreError::Unavailable(_))));
        assert!(matches!(
            store.create(wrench(3)),
            Err(StoreError::Unavailable(_))
        ));
    }

    #[test]
    fn shared_through_arc() {
        let store = std::sync::Arc::new(InMemoryItemStore::seeded());
        let dyn_store: std::sync::Arc<dyn ItemStore> = store.clone();
        dyn_store.delete(id(0)).unwrap();
        assert_eq!(store.list().unwrap().len(), 2);
    }
}
