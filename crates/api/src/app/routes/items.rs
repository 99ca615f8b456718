use axum::{
    Json,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use stockroom_inventory::Item;

use crate::app::{dto, errors};
use crate::context::StoreContext;

pub async fn list_items(Extension(ctx): Extension<StoreContext>) -> axum::response::Response {
    match ctx.store().list() {
        Ok(items) => (StatusCode::OK, Json(dto::ItemsResponse { items })).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(ctx): Extension<StoreContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match ctx.store().get(id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn query_items(
    Extension(ctx): Extension<StoreContext>,
    params: Result<Query<dto::ItemQueryParams>, QueryRejection>,
) -> axum::response::Response {
    let query = match params {
        Ok(Query(p)) => match p.into_query() {
            Ok(q) => q,
            Err(resp) => return resp,
        },
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_query", e.body_text()),
    };

    tracing::debug!(?query, "querying items");

    match ctx.store().query(&query) {
        Ok(selection) => {
            tracing::debug!(matched = selection.len(), "query selection");
            (StatusCode::OK, Json(dto::SelectionResponse { query, selection })).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(ctx): Extension<StoreContext>,
    body: Result<Json<Item>, JsonRejection>,
) -> axum::response::Response {
    let item = match body {
        Ok(Json(item)) => item,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", e.body_text()),
    };

    match ctx.store().create(item) {
        Ok(added) => (StatusCode::OK, Json(dto::AddedResponse { added })).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(ctx): Extension<StoreContext>,
    Path(id): Path<String>,
    params: Result<Query<dto::UpdateItemParams>, QueryRejection>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let patch = match params {
        Ok(Query(p)) => match p.into_patch() {
            Ok(patch) => patch,
            Err(resp) => return resp,
        },
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_query", e.body_text()),
    };

    match ctx.store().update(id, patch) {
        Ok(updated) => (StatusCode::OK, Json(dto::UpdatedResponse { updated })).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(ctx): Extension<StoreContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match ctx.store().delete(id) {
        Ok(deleted) => (StatusCode::OK, Json(dto::DeletedResponse { deleted })).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
