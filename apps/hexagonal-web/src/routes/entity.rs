//! Entity routes

use axum::{routing::get, Router};

use crate::{handlers::entity::get_entity_handler, state::AppState};

/// Create entity routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/entity/:id", get(get_entity_handler))
}
