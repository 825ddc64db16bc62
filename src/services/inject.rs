use crate::{Interface, Svc};
use std::{
    fmt::{Debug, Formatter},
    sync::{PoisonError, RwLock},
};

/// A field that the container can fill with a component and reset later.
///
/// Slots start out empty. The container fills them while wiring the owning
/// component and empties them again when a pooled component is released, so
/// slots use interior mutability: components are shared through [`Svc`]
/// pointers and may point at each other in cycles.
///
/// ```
/// use graph_injector::{Inject, Svc};
///
/// let slot: Inject<String> = Inject::new();
/// assert!(slot.is_empty());
///
/// let slot = Inject::with(Svc::new("hello".to_owned()));
/// assert_eq!("hello", slot.get().unwrap().as_str());
/// ```
pub struct Inject<I: ?Sized + Interface> {
    slot: RwLock<Option<Svc<I>>>,
}

impl<I: ?Sized + Interface> Inject<I> {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Inject {
            slot: RwLock::new(None),
        }
    }

    /// Creates a slot that already holds a component.
    #[must_use]
    pub fn with(service: Svc<I>) -> Self {
        Inject {
            slot: RwLock::new(Some(service)),
        }
    }

    /// Gets the component in this slot, if any.
    #[must_use]
    pub fn get(&self) -> Option<Svc<I>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns whether this slot holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Returns whether this slot holds exactly `service`.
    #[must_use]
    pub fn holds(&self, service: &Svc<I>) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(false, |current| Svc::ptr_eq(current, service))
    }

    pub(crate) fn set(&self, service: Svc<I>) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) =
            Some(service);
    }

    pub(crate) fn clear(&self) -> Option<Svc<I>> {
        self.slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl<I: ?Sized + Interface> Default for Inject<I> {
    fn default() -> Self {
        Inject::new()
    }
}

impl<I: ?Sized + Interface> Debug for Inject<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = if self.is_empty() { "<empty>" } else { "<wired>" };
        f.debug_tuple("Inject").field(&format_args!("{}", state)).finish()
    }
}
