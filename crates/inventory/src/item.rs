use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ItemId};

/// Item classification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tools,
    Consumables,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tools => "tools",
            Category::Consumables => "consumables",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Case-insensitive: `TOOLS`, `tools` and `Tools` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tools" => Ok(Category::Tools),
            "consumables" => Ok(Category::Consumables),
            _ => Err(DomainError::validation(
                "category must be one of: tools, consumables",
            )),
        }
    }
}

/// Inventory record.
///
/// `id` is fixed at creation; every other field may change over the item's life.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub count: i64,
    pub id: ItemId,
    pub category: Category,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: f64,
        count: i64,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            count,
            id,
            category,
        }
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    ///
    /// An empty patch, or one carrying a non-finite price, is rejected and
    /// leaves the item unchanged.
    pub fn apply_patch(&mut self, patch: ItemPatch) -> DomainResult<()> {
        if patch.is_empty() {
            return Err(DomainError::invalid_argument(
                "no parameters provided for update",
            ));
        }
        if patch.price.is_some_and(|p| !p.is_finite()) {
            return Err(DomainError::invalid_argument(
                "price must be a finite number",
            ));
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(count) = patch.count {
            self.count = count;
        }
        Ok(())
    }
}

/// Partial update of the mutable item fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub count: Option<i64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.count.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hammer() -> Item {
        Item::new(ItemId::new(0), "Hammer", 9.99, 20, Category::Tools)
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("TOOLS".parse::<Category>().unwrap(), Category::Tools);
        assert_eq!("tools".parse::<Category>().unwrap(), Category::Tools);
        assert_eq!("Consumables".parse::<Category>().unwrap(), Category::Consumables);
    }

    #[test]
    fn category_rejects_unknown_values() {
        let err = "fasteners".parse::<Category>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("tools, consumables")),
            _ => panic!("Expected Validation error for unknown category"),
        }
    }

    #[test]
    fn category_display_matches_wire_value() {
        for category in [Category::Tools, Category::Consumables] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn item_uses_lowercase_category_on_the_wire() {
        let json = serde_json::to_value(hammer()).unwrap();
        assert_eq!(json["category"], "tools");
        assert_eq!(json["id"], 0);
        assert_eq!(json["name"], "Hammer");
    }

    #[test]
    fn item_rejects_unknown_category_in_json() {
        let body = serde_json::json!({
            "name": "Saw", "price": 1.0, "count": 1, "id": 9, "category": "weapons"
        });
        assert!(serde_json::from_value::<Item>(body).is_err());
    }

    #[test]
    fn apply_patch_rejects_empty_patch() {
        let mut item = hammer();
        let err = item.apply_patch(ItemPatch::default()).unwrap_err();
        match err {
            DomainError::InvalidArgument(_) => {}
            _ => panic!("Expected InvalidArgument for empty patch"),
        }
        assert_eq!(item, hammer());
    }

    #[test]
    fn apply_patch_rejects_non_finite_price() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut item = hammer();
            let err = item
                .apply_patch(ItemPatch {
                    name: Some("Mallet".to_string()),
                    price: Some(price),
                    ..ItemPatch::default()
                })
                .unwrap_err();
            match err {
                DomainError::InvalidArgument(msg) => assert!(msg.contains("finite")),
                _ => panic!("Expected InvalidArgument for non-finite price"),
            }
            assert_eq!(item, hammer());
        }
    }

    #[test]
    fn apply_patch_overwrites_only_provided_fields() {
        let mut item = hammer();
        item.apply_patch(ItemPatch {
            count: Some(5),
            ..ItemPatch::default()
        })
        .unwrap();

        assert_eq!(item.count, 5);
        assert_eq!(item.name, "Hammer");
        assert_eq!(item.price, 9.99);
        assert_eq!(item.category, Category::Tools);
        assert_eq!(item.id, ItemId::new(0));
    }

    #[test]
    fn apply_patch_can_set_all_mutable_fields() {
        let mut item = hammer();
        item.apply_patch(ItemPatch {
            name: Some("Mallet".to_string()),
            price: Some(12.5),
            count: Some(3),
        })
        .unwrap();

        assert_eq!(item, Item::new(ItemId::new(0), "Mallet", 12.5, 3, Category::Tools));
    }
}
