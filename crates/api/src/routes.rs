use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
///
/// Path casing is part of the public contract with exchange integrations.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/circulation", get(handlers::get_circulation))
        .route("/CirculatingSupply", get(handlers::get_circulating_supply))
        .route("/TotalSupply", get(handlers::get_total_supply))
        .with_state(state)
}
