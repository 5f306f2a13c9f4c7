//! Minimal service container
//!
//! Hosts register singleton factories on a [`ServiceCollection`] and resolve
//! them from the built [`ServiceProvider`]. Each singleton is created on first
//! resolution and shared afterwards.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use crate::config::RegistryConfig;
use crate::ecs::ComponentRegistry;
use crate::error::ServiceError;

type SharedService = Arc<dyn Any + Send + Sync>;
type Factory = Box<dyn Fn(&ServiceProvider) -> SharedService + Send + Sync>;

struct Registration {
    type_name: &'static str,
    factory: Factory,
}

#[derive(Default)]
pub struct ServiceCollection {
    registrations: HashMap<TypeId, Registration>,
}

impl ServiceCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            registrations: HashMap::new(),
        }
    }

    /// Register a singleton built by `factory`. A later registration for the same type replaces it.
    pub fn add_singleton<T, F>(mut self, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&ServiceProvider) -> T + Send + Sync + 'static,
    {
        let registration = Registration {
            type_name: type_name::<T>(),
            factory: Box::new(move |provider| Arc::new(factory(provider)) as SharedService),
        };
        self.registrations.insert(TypeId::of::<T>(), registration);
        self
    }

    /// Register a [`ComponentRegistry`] with the default configuration.
    pub fn use_component_registry(self) -> Self {
        self.use_component_registry_with(RegistryConfig::default())
    }

    /// Register a [`ComponentRegistry`] built from `config`.
    pub fn use_component_registry_with(self, config: RegistryConfig) -> Self {
        self.add_singleton(move |_| ComponentRegistry::with_config(&config))
    }

    /// Freeze the registrations into a provider
    pub fn build(self) -> ServiceProvider {
        ServiceProvider {
            registrations: self.registrations,
            instances: Mutex::new(HashMap::new()),
        }
    }
}

pub struct ServiceProvider {
    registrations: HashMap<TypeId, Registration>,
    instances: Mutex<HashMap<TypeId, SharedService>>,
}

impl ServiceProvider {
    /// Resolve `T`, creating it on first use. `None` if `T` was never registered.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let type_id = TypeId::of::<T>();
        let registration = self.registrations.get(&type_id)?;

        if let Some(existing) = self.instances.lock().get(&type_id) {
            return existing.clone().downcast::<T>().ok();
        }

        // Built outside the lock so factories can resolve their own dependencies.
        let created = (registration.factory)(self);
        let instance = self
            .instances
            .lock()
            .entry(type_id)
            .or_insert_with(|| {
                info!(service = registration.type_name, "service instantiated");
                created
            })
            .clone();
        instance.downcast::<T>().ok()
    }

    pub fn get_required<T: Any + Send + Sync>(&self) -> Result<Arc<T>, ServiceError> {
        self.get::<T>().ok_or(ServiceError::NotRegistered {
            type_name: type_name::<T>(),
        })
    }

    pub fn is_registered<T: Any>(&self) -> bool {
        self.registrations.contains_key(&TypeId::of::<T>())
    }
}
