//! API route handlers

pub mod collection;
pub mod contract;
pub mod health;
pub mod mint;

use axum::{routing::get, Router};

use crate::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/contract", contract::router())
        .nest("/collection", collection::router())
        .nest("/mint", mint::router())
        .with_state(state)
}
