//! SQLite Entity Repository Implementation
//!
//! This module implements the `EntityRepositoryPort` trait using SQLite as the
//! backing store. It issues single-row point reads and converts SQLite errors
//! to domain errors.

use std::future::Future;
use std::path::Path;
use std::sync::{Arc, Mutex};

use hexagonal_domain::{
    lookup::{
        entity::Entity,
        error::{EntityError, Result},
        ids::EntityId,
    },
    ports::EntityRepositoryPort,
};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, error, info, instrument, Instrument};

/// Name of the table holding entities, keyed by `id`
pub const ENTITY_TABLE: &str = "my_entity";

fn ensure_table_sql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (id INTEGER PRIMARY KEY)",
        ENTITY_TABLE
    )
}

fn find_by_id_sql() -> String {
    format!("SELECT id FROM {} WHERE id = ?1", ENTITY_TABLE)
}

/// SQLite-based implementation of the EntityRepositoryPort
///
/// The store is owned by whoever populates it; this adapter only reads.
///
/// ## Concurrency
///
/// `rusqlite::Connection` is not `Sync`, so the connection lives behind a
/// `Mutex`. Every lookup runs on the blocking thread pool via
/// `tokio::task::spawn_blocking`.
///
/// ## Error Handling
///
/// SQLite errors, a poisoned lock and a failed blocking task are all converted
/// to `EntityError::StorageFailure`. A missing row is `Ok(None)`.
#[derive(Clone)]
pub struct SqliteEntityRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteEntityRepository {
    /// Open (or create) a SQLite database file
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use hexagonal_sqlite::SqliteEntityRepository;
    ///
    /// let repo = SqliteEntityRepository::open("entities.db").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Opening SQLite entity store");

        let conn = Connection::open(path).map_err(|err| {
            EntityError::config_error(format!(
                "Failed to open SQLite database '{}': {}",
                path.display(),
                err
            ))
        })?;

        Self::with_connection(conn)
    }

    /// Open an empty in-memory store
    pub fn open_in_memory() -> Result<Self> {
        info!("Opening in-memory SQLite entity store");

        let conn = Connection::open_in_memory().map_err(|err| {
            EntityError::config_error(format!("Failed to open in-memory SQLite database: {}", err))
        })?;

        Self::with_connection(conn)
    }

    /// Wrap an existing connection, e.g. one already populated by its owner
    ///
    /// Ensures the entity table exists. Existing rows are left as they are.
    pub fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(&ensure_table_sql(), []).map_err(|err| {
            EntityError::config_error(format!(
                "Failed to ensure table '{}' exists: {}",
                ENTITY_TABLE, err
            ))
        })?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn query_id(conn: &Connection, id: EntityId) -> rusqlite::Result<Option<i64>> {
        conn.query_row(&find_by_id_sql(), params![id.value()], |row| row.get(0))
            .optional()
    }
}

impl EntityRepositoryPort for SqliteEntityRepository {
    #[instrument(skip(self, id), fields(entity_id = %id))]
    fn find_by_id(&self, id: EntityId) -> impl Future<Output = Result<Option<Entity>>> + Send {
        let conn = self.conn.clone();

        async move {
            debug!(entity_id = %id, table = ENTITY_TABLE, "Looking up entity in SQLite");

            let lookup = tokio::task::spawn_blocking(move || {
                let conn = conn.lock().map_err(|_| {
                    EntityError::storage_failure("SQLite connection lock poisoned")
                })?;

                Self::query_id(&conn, id).map_err(|err| {
                    EntityError::storage_failure(format!(
                        "SQLite lookup failed for id {}: {}",
                        id, err
                    ))
                })
            })
            .await;

            let row = match lookup {
                Ok(result) => result,
                Err(err) => {
                    error!(entity_id = %id, error = ?err, "SQLite lookup task failed");
                    return Err(EntityError::storage_failure(format!(
                        "SQLite lookup task failed for id {}: {}",
                        id, err
                    )));
                }
            };

            match row {
                Ok(Some(found)) => {
                    debug!(entity_id = %id, "Entity found in SQLite");
                    Ok(Some(Entity::new(EntityId::new(found))))
                }
                Ok(None) => {
                    debug!(entity_id = %id, "Entity not found in SQLite");
                    Ok(None)
                }
                Err(err) => {
                    error!(entity_id = %id, error = %err, "Failed to look up entity in SQLite");
                    Err(err)
                }
            }
        }
        .in_current_span()
    }
}
