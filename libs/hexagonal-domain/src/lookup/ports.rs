//! Port trait for the lookup service
//!
//! The inbound adapters (web layer) depend on this trait, while the concrete
//! `EntityService` in `service.rs` provides the implementation.

use std::future::Future;

use crate::lookup::{error::Result, ids::EntityId};

/// Port trait for lookup operations
pub trait EntityServicePort: Send + Sync {
    /// Look up the entity with the given identifier and discard the result
    ///
    /// A missing entity is tolerated silently: present and absent identifiers
    /// both complete with `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::StorageFailure` only if the backing store fails
    fn do_something(&self, id: EntityId) -> impl Future<Output = Result<()>> + Send;
}
