//! Domain entity looked up by the service
//!
//! The Entity is owned by whatever system populates the backing store.
//! This service never creates, updates or deletes entities; it only
//! reconstructs them from storage during point reads.

use serde::{Deserialize, Serialize};

use crate::lookup::ids::EntityId;

/// An identifier-bearing domain record
///
/// The identifier is the only attribute; it is unique within the backing store.
///
/// # Example
///
/// ```rust
/// use hexagonal_domain::lookup::{Entity, EntityId};
///
/// let entity = Entity::new(EntityId::new(42));
/// assert_eq!(entity.id().value(), 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier for this entity
    id: EntityId,
}

impl Entity {
    /// Reconstruct an Entity from its identifier
    pub fn new(id: EntityId) -> Self {
        Self { id }
    }

    /// Get the entity's unique identifier
    pub fn id(&self) -> &EntityId {
        &self.id
    }
}
