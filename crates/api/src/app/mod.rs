//! HTTP API application wiring (Axum router + store wiring).
//!
//! If you're new to Rust, this folder is structured like:
//! - `services.rs`: store construction from configuration
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: query-string DTOs and response bodies
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use stockroom_infra::ItemStore;

use crate::context::StoreContext;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(store: Arc<dyn ItemStore>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(StoreContext::new(store))),
        )
}
