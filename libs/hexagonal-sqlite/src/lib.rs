//! # Hexagonal SQLite Adapter
//!
//! Implements the domain's `EntityRepositoryPort` on top of a SQLite table.

pub mod infrastructure;

pub use infrastructure::SqliteEntityRepository;
