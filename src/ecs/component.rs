//! Per-entity component slots, one per component type

use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

type SharedComponent = Arc<dyn Any + Send + Sync>;

/// Component slots for a single entity, keyed by component type.
#[derive(Default)]
pub struct ComponentSlots {
    slots: HashMap<TypeId, SharedComponent>,
}

impl ComponentSlots {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Fill the slot for `C`. Returns `false` and leaves the slot untouched if it is taken.
    pub fn insert<C: Any + Send + Sync>(&mut self, component: Arc<C>) -> bool {
        match self.slots.entry(TypeId::of::<C>()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(component);
                true
            }
        }
    }

    pub fn get<C: Any + Send + Sync>(&self) -> Option<Arc<C>> {
        let component = self.slots.get(&TypeId::of::<C>())?.clone();
        component.downcast::<C>().ok()
    }

    /// Number of filled slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
