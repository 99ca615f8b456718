use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;
use stockroom_infra::StoreError;
use stockroom_inventory::Category;

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Domain(e) => domain_error_to_response(e),
        StoreError::Unavailable(msg) => {
            tracing::error!("store unavailable: {msg}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_unavailable", msg)
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        DomainError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", message),
        DomainError::Conflict(_) => json_error(StatusCode::BAD_REQUEST, "conflict", message),
        DomainError::InvalidArgument(_) | DomainError::Validation(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_argument", message)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_item_id(s: &str) -> Result<stockroom_core::ItemId, axum::response::Response> {
    s.parse()
        .map_err(|_| json_error(StatusCode::BAD_REQUEST, "invalid_id", "item id must be an integer"))
}

/// Query strings accept `NaN` and `inf`, which JSON cannot carry back.
pub fn check_price(price: Option<f64>) -> Result<Option<f64>, axum::response::Response> {
    match price {
        Some(p) if !p.is_finite() => Err(json_error(
            StatusCode::BAD_REQUEST,
            "invalid_query",
            "price must be a finite number",
        )),
        _ => Ok(price),
    }
}

pub fn parse_category(s: &str) -> Result<Category, axum::response::Response> {
    s.parse()
        .map_err(|e: DomainError| json_error(StatusCode::BAD_REQUEST, "invalid_category", e.to_string()))
}
