//! Infrastructure adapters

mod sqlite_repository;

pub use sqlite_repository::{SqliteEntityRepository, ENTITY_TABLE};
