//! API routes

pub mod entity;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{dto::entity::ErrorResponse, handlers, state::AppState};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::entity::get_entity_handler,
        health_handler
    ),
    components(
        schemas(ErrorResponse)
    ),
    tags(
        (name = "entity", description = "Entity lookup endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Hexagonal API",
        version = "0.1.0",
        description = "Entity lookup service built on ports and adapters"
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(entity::routes())
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, Bytes},
        http::{Request, StatusCode},
    };
    use hexagonal_sqlite::SqliteEntityRepository;
    use http_body_util::BodyExt;
    use rusqlite::Connection;
    use tower::ServiceExt;

    fn app_with(conn: Connection) -> Router {
        let repository = SqliteEntityRepository::with_connection(conn).unwrap();
        create_router(AppState::with_repository(repository))
    }

    fn app_with_ids(ids: &[i64]) -> Router {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE my_entity (id INTEGER PRIMARY KEY)", [])
            .unwrap();
        for id in ids {
            conn.execute("INSERT INTO my_entity (id) VALUES (?1)", [id])
                .unwrap();
        }
        app_with(conn)
    }

    fn broken_app() -> Router {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE my_entity (key INTEGER PRIMARY KEY)", [])
            .unwrap();
        app_with(conn)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body)
    }

    #[tokio::test]
    async fn test_present_entity_returns_empty_ok() {
        let (status, body) = get(app_with_ids(&[42]), "/entity/42").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_absent_entity_returns_empty_ok() {
        let (status, body) = get(app_with_ids(&[]), "/entity/999").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_present_and_absent_are_indistinguishable() {
        let app = app_with_ids(&[1]);

        let present = get(app.clone(), "/entity/1").await;
        let absent = get(app, "/entity/2").await;

        assert_eq!(present, absent);
    }

    #[tokio::test]
    async fn test_negative_identifier_is_accepted() {
        let (status, body) = get(app_with_ids(&[]), "/entity/-5").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_identifier_is_bad_request() {
        let (status, _) = get(app_with_ids(&[]), "/entity/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get(app_with_ids(&[]), "/entity/9223372036854775808").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_identifier_never_reaches_storage() {
        // A broken store would answer 500 if the service were called.
        let (status, _) = get(broken_app(), "/entity/abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_storage_failure_returns_server_error() {
        let (status, body) = get(broken_app(), "/entity/42").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("Storage operation failed"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(app_with_ids(&[]), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_paths() {
        let (status, body) = get(app_with_ids(&[]), "/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["paths"].get("/entity/{id}").is_some());
        assert!(json["paths"].get("/health").is_some());
    }
}
