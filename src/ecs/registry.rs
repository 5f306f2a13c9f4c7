//! ComponentRegistry - entity identity to per-type component slots

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::{ComponentSlots, Entity};
use crate::config::RegistryConfig;
use crate::error::RegistryError;

/// Registry holding at most one component per (entity, component type).
///
/// Associations are never overwritten or removed. `assign` reports failures as
/// [`RegistryError`]; `try_assign` reports the same failures as `false`.
pub struct ComponentRegistry {
    entities: RwLock<HashMap<Entity, ComponentSlots>>,
    trace_assignments: bool,
}

impl ComponentRegistry {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// Create an empty registry sized and traced per `config`
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            entities: RwLock::new(HashMap::with_capacity(config.initial_capacity)),
            trace_assignments: config.logging.trace_assignments,
        }
    }

    /// Associate `component` with `entity`, keyed by the component's type.
    ///
    /// Fails with [`RegistryError::ArgumentInvalid`] when either argument is
    /// `None` (the entity is checked first), and with
    /// [`RegistryError::ComponentAlreadyAssigned`] when the entity already holds
    /// a `C`. Nothing changes on failure.
    pub fn assign<C: Any + Send + Sync>(
        &self,
        entity: Option<&Entity>,
        component: Option<Arc<C>>,
    ) -> Result<(), RegistryError> {
        self.insert(entity, component)
    }

    /// Same as [`assign`](Self::assign), but every failure collapses to `false`.
    pub fn try_assign<C: Any + Send + Sync>(
        &self,
        entity: Option<&Entity>,
        component: Option<Arc<C>>,
    ) -> bool {
        match self.insert(entity, component) {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, "component assignment rejected");
                false
            }
        }
    }

    /// View of the components currently associated with `entity`.
    ///
    /// Entities that were never assigned anything get a valid, empty view.
    pub fn state_for(&self, entity: &Entity) -> EntityState<'_> {
        EntityState {
            registry: self,
            entity: entity.clone(),
        }
    }

    /// Number of entities holding at least one component
    pub fn entity_count(&self) -> usize {
        self.entities
            .read()
            .values()
            .filter(|slots| !slots.is_empty())
            .count()
    }

    /// Number of (entity, component type) associations
    pub fn component_count(&self) -> usize {
        self.entities.read().values().map(ComponentSlots::len).sum()
    }

    fn insert<C: Any + Send + Sync>(
        &self,
        entity: Option<&Entity>,
        component: Option<Arc<C>>,
    ) -> Result<(), RegistryError> {
        let entity = entity.ok_or(RegistryError::ArgumentInvalid { argument: "entity" })?;
        let component = component.ok_or(RegistryError::ArgumentInvalid {
            argument: "component",
        })?;

        let mut entities = self.entities.write();
        let slots = entities.entry(entity.clone()).or_default();

        if !slots.insert(component) {
            return Err(RegistryError::ComponentAlreadyAssigned {
                type_name: type_name::<C>(),
                entity: format!("{entity:?}"),
            });
        }

        if self.trace_assignments {
            debug!(?entity, component = type_name::<C>(), "component assigned");
        }
        Ok(())
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Live view of one entity's components.
pub struct EntityState<'a> {
    registry: &'a ComponentRegistry,
    entity: Entity,
}

impl EntityState<'_> {
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// The `T` associated with this entity, or `T::default()` when there is none.
    ///
    /// An absent component and a stored default value look the same here; use
    /// [`get_shared`](Self::get_shared) to tell them apart.
    pub fn get<T: Any + Send + Sync + Clone + Default>(&self) -> T {
        self.get_shared::<T>()
            .map(|component| T::clone(&component))
            .unwrap_or_default()
    }

    /// The shared `T` instance associated with this entity, if any.
    pub fn get_shared<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.registry
            .entities
            .read()
            .get(&self.entity)
            .and_then(|slots| slots.get::<T>())
    }
}
