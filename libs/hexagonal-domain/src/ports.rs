//! Outbound ports (trait definitions) for external dependencies
//!
//! Following hexagonal architecture, the domain defines what it needs from
//! persistence and the adapter crates provide implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait`, so each adapter is monomorphized into the service.

use std::future::Future;

use crate::lookup::{entity::Entity, error::Result, ids::EntityId};

/// Port for entity persistence
///
/// This trait is the narrowest view of the backing store the service needs:
/// a single-record point read keyed by identifier. Implementations must:
/// - Never mutate the store while answering a lookup
/// - Report a missing entity as `Ok(None)`, never as an error
/// - Convert infrastructure errors to `EntityError::StorageFailure`
pub trait EntityRepositoryPort: Send + Sync {
    /// Find an entity by its identifier
    ///
    /// # Returns
    ///
    /// `Some(entity)` if a record with this identifier exists, `None` otherwise
    ///
    /// # Errors
    ///
    /// Returns `EntityError::StorageFailure` if the backing store cannot be queried
    fn find_by_id(&self, id: EntityId) -> impl Future<Output = Result<Option<Entity>>> + Send;
}
