use axum::{Router, routing::get};

pub mod items;
pub mod system;

/// Router for the item endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route("/items", get(items::query_items))
        .route(
            "/items/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
}
