//! DTOs for entity endpoints

use serde::Serialize;
use utoipa::ToSchema;

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "Storage operation failed: database is locked")]
    pub error: String,
}
