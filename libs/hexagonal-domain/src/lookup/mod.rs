//! Lookup domain module
//!
//! This module contains the entity model and the service that looks
//! entities up by identifier through the repository port.

pub mod entity;
pub mod error;
pub mod ids;
pub mod ports;
pub mod service;

pub use entity::Entity;
pub use error::{EntityError, Result};
pub use ids::EntityId;
pub use ports::EntityServicePort;
pub use service::EntityService;
