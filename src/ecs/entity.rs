//! Entity handles

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Opaque entity reference, compared by identity.
///
/// Clones of a handle are the same entity. Two handles built from equal
/// values are different entities, because each owns its own allocation.
#[derive(Clone)]
pub struct Entity {
    inner: Arc<dyn Any + Send + Sync>,
}

impl Entity {
    /// Wrap a caller value as a new entity
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Use an existing shared value as the entity; identity is the `Arc` allocation.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self { inner: value }
    }

    /// Entity carrying no data of its own
    pub fn anonymous() -> Self {
        Self::new(())
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn ptr_eq(&self, other: &Entity) -> bool {
        self.addr() == other.addr()
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({:#x})", self.addr())
    }
}
