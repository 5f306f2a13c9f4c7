//! Entity-component association storage
//!
//! Entities are keyed by identity, components by their concrete type.

pub mod component;
pub mod entity;
pub mod registry;

pub use component::ComponentSlots;
pub use entity::Entity;
pub use registry::{ComponentRegistry, EntityState};
