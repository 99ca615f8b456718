use stockroom_core::ItemId;

use crate::item::{Category, Item};

/// Records a fresh store starts with.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(ItemId::new(0), "Hammer", 9.99, 20, Category::Tools),
        Item::new(ItemId::new(1), "Pliers", 4.99, 20, Category::Tools),
        Item::new(ItemId::new(2), "Nails", 2.99, 200, Category::Consumables),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_sequential() {
        let ids: Vec<i64> = seed_items().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
