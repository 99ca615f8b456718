//! Attribute filter over items.

use serde::{Deserialize, Serialize};

use crate::item::{Category, Item};

/// Equality filter: every field that is set must match, unset fields match anything.
///
/// Serializes with explicit `null`s so it can be echoed back alongside results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemQuery {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub count: Option<i64>,
    pub category: Option<Category>,
}

impl ItemQuery {
    /// Price is compared with exact float equality.
    pub fn matches(&self, item: &Item) -> bool {
        self.name.as_ref().is_none_or(|name| &item.name == name)
            && self.price.is_none_or(|price| item.price == price)
            && self.count.is_none_or(|count| item.count == count)
            && self.category.is_none_or(|category| item.category == category)
    }
}
