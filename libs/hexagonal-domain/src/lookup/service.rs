//! Lookup service - delegation from the inbound port to the repository port
//!
//! The service fetches the entity through the repository port and discards it.
//! It adds no validation or transformation of its own.

use std::future::Future;

use tracing::debug;

use super::{EntityId, EntityServicePort, Result};
use crate::ports::EntityRepositoryPort;

/// Service behind the `EntityServicePort`
///
/// ## Static Dispatch
///
/// The service is generic over any `EntityRepositoryPort` implementation.
/// The binding between the port and its adapter happens once, when the
/// application constructs the service at startup.
pub struct EntityService<R> {
    repository: R,
}

impl<R> EntityService<R>
where
    R: EntityRepositoryPort,
{
    /// Create a new EntityService backed by the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Get the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<R> EntityServicePort for EntityService<R>
where
    R: EntityRepositoryPort,
{
    fn do_something(&self, id: EntityId) -> impl Future<Output = Result<()>> + Send {
        async move {
            // Absent is not a failure; the entity itself is discarded.
            match self.repository.find_by_id(id).await? {
                Some(_) => debug!(entity_id = %id, "Entity found"),
                None => debug!(entity_id = %id, "Entity absent"),
            }

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{Entity, EntityError};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // In-memory storage for testing
    struct InMemoryRepository {
        entities: Arc<Mutex<HashMap<EntityId, Entity>>>,
        lookups: Arc<Mutex<Vec<EntityId>>>,
    }

    impl InMemoryRepository {
        fn with_ids(ids: &[i64]) -> Self {
            let entities = ids
                .iter()
                .map(|&id| (EntityId::new(id), Entity::new(EntityId::new(id))))
                .collect();

            Self {
                entities: Arc::new(Mutex::new(entities)),
                lookups: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn lookups(&self) -> Vec<EntityId> {
            self.lookups.lock().unwrap().clone()
        }
    }

    impl EntityRepositoryPort for InMemoryRepository {
        fn find_by_id(&self, id: EntityId) -> impl Future<Output = Result<Option<Entity>>> + Send {
            let entities = self.entities.clone();
            let lookups = self.lookups.clone();

            async move {
                lookups.lock().unwrap().push(id);
                Ok(entities.lock().unwrap().get(&id).cloned())
            }
        }
    }

    struct FailingRepository {
        calls: AtomicUsize,
    }

    impl EntityRepositoryPort for FailingRepository {
        fn find_by_id(&self, _id: EntityId) -> impl Future<Output = Result<Option<Entity>>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async { Err(EntityError::storage_failure("connection refused")) }
        }
    }

    #[tokio::test]
    async fn test_do_something_with_present_entity() {
        let service = EntityService::new(InMemoryRepository::with_ids(&[42]));

        let result = service.do_something(EntityId::new(42)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_do_something_with_absent_entity() {
        let service = EntityService::new(InMemoryRepository::with_ids(&[]));

        let result = service.do_something(EntityId::new(999)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_do_something_delegates_once_with_same_id() {
        let service = EntityService::new(InMemoryRepository::with_ids(&[1, 2, 3]));

        service.do_something(EntityId::new(2)).await.unwrap();
        service.do_something(EntityId::new(5)).await.unwrap();

        assert_eq!(
            service.repository().lookups(),
            vec![EntityId::new(2), EntityId::new(5)]
        );
    }

    #[tokio::test]
    async fn test_do_something_leaves_store_untouched() {
        let service = EntityService::new(InMemoryRepository::with_ids(&[42]));
        let before = service.repository().entities.lock().unwrap().clone();

        service.do_something(EntityId::new(42)).await.unwrap();
        service.do_something(EntityId::new(7)).await.unwrap();

        let after = service.repository().entities.lock().unwrap().clone();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_do_something_propagates_storage_failure() {
        let service = EntityService::new(FailingRepository {
            calls: AtomicUsize::new(0),
        });

        let result = service.do_something(EntityId::new(42)).await;

        assert!(matches!(result, Err(EntityError::StorageFailure(_))));
        assert_eq!(service.repository().calls.load(Ordering::SeqCst), 1);
    }
}
