//! Application state and dependency wiring

use std::sync::Arc;

use hexagonal_domain::lookup::{EntityError, EntityService};
use hexagonal_sqlite::SqliteEntityRepository;
use tracing::info;

use crate::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub entity_service: Arc<EntityService<SqliteEntityRepository>>,
}

impl AppState {
    /// Bind the repository port to the SQLite adapter and build the service
    pub fn build(config: &AppConfig) -> Result<Self, EntityError> {
        let repository = if config.is_in_memory() {
            SqliteEntityRepository::open_in_memory()?
        } else {
            SqliteEntityRepository::open(&config.database)?
        };

        info!(database = %config.database, "Entity repository ready");

        Ok(Self::with_repository(repository))
    }

    /// Build the state around an already opened repository
    pub fn with_repository(repository: SqliteEntityRepository) -> Self {
        Self {
            entity_service: Arc::new(EntityService::new(repository)),
        }
    }
}
