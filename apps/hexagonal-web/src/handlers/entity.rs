//! Entity lookup handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use hexagonal_domain::lookup::{EntityId, EntityServicePort};
use tracing::{error, info};

use crate::{dto::entity::ErrorResponse, state::AppState};

/// Look up an entity by identifier
///
/// The response is the same empty `200 OK` whether or not the entity exists.
#[utoipa::path(
    get,
    path = "/entity/{id}",
    params(
        ("id" = i64, Path, description = "Entity identifier")
    ),
    responses(
        (status = 200, description = "Lookup completed, empty body whether or not the entity exists"),
        (status = 400, description = "Identifier is not a valid 64-bit integer", body = String),
        (status = 500, description = "Backing store failed", body = ErrorResponse)
    ),
    tag = "entity"
)]
pub async fn get_entity_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let id = EntityId::new(id);
    info!(entity_id = %id, "Received entity lookup request");

    match state.entity_service.do_something(id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => {
            error!(entity_id = %id, error = ?err, "Entity lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
