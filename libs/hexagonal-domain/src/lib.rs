//! # Hexagonal Domain Layer
//!
//! This crate contains the domain model and the ports of the entity lookup
//! service. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Entity, EntityId)
//! - **Ports**: Trait definitions for the outbound repository and the inbound service
//! - **Services**: The service implementation that drives the repository port
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (SQL, HTTP, etc.).
//! The persistence store is expressed as a trait (port) implemented by an
//! adapter crate, and the web layer only talks to the service port.
//!
//! ## Example
//!
//! ```rust
//! use hexagonal_domain::lookup::{EntityId, EntityService, EntityServicePort};
//! use hexagonal_domain::ports::EntityRepositoryPort;
//!
//! // The service is generic over any EntityRepositoryPort implementation
//! async fn example<R: EntityRepositoryPort>(service: EntityService<R>) {
//!     service.do_something(EntityId::new(42)).await.unwrap();
//! }
//! ```

pub mod lookup;
pub mod ports;

// Re-export commonly used types
pub use lookup::{Entity, EntityError, EntityId, EntityService, EntityServicePort};
pub use ports::EntityRepositoryPort;
