use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;
use stockroom_inventory::{Item, ItemPatch, ItemQuery};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// `GET /items` query string. Category stays a string so an unknown value can
/// be reported with the allowed set.
#[derive(Debug, Default, Deserialize)]
pub struct ItemQueryParams {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub count: Option<i64>,
    pub category: Option<String>,
}

impl ItemQueryParams {
    pub fn into_query(self) -> Result<ItemQuery, axum::response::Response> {
        let category = match self.category.as_deref() {
            Some(raw) => Some(errors::parse_category(raw)?),
            None => None,
        };
        Ok(ItemQuery {
            name: self.name,
            price: errors::check_price(self.price)?,
            count: self.count,
            category,
        })
    }
}

/// `PUT /items/{id}` query string.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemParams {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub count: Option<i64>,
}

impl UpdateItemParams {
    pub fn into_patch(self) -> Result<ItemPatch, axum::response::Response> {
        Ok(ItemPatch {
            name: self.name,
            price: errors::check_price(self.price)?,
            count: self.count,
        })
    }
}

// -------------------------
// Response bodies
// -------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: BTreeMap<ItemId, Item>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub query: ItemQuery,
    pub selection: Vec<Item>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddedResponse {
    pub added: Item,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedResponse {
    pub updated: Item,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: Item,
}
