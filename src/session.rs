use crate::{ComponentName, DynSvc};
use std::{
    collections::HashMap,
    fmt::{Debug, Formatter},
};

/// The components taking part in one resolution.
///
/// A session is an arena of instances plus an index from component name to
/// arena slot. The resolver reserves a component's slot *before* wiring its
/// fields, so a component that depends on itself through other components
/// finds its own (still partially wired) instance instead of recursing
/// forever. Within one session, every name resolves to exactly one instance.
///
/// Sessions belong to one caller at a time and must be released through the
/// container once the caller is done with them, see
/// [`Container::release_session`](crate::Container::release_session) and
/// [`Scope`](crate::Scope).
#[derive(Default)]
pub struct Session {
    arena: Vec<(ComponentName, DynSvc)>,
    index: HashMap<ComponentName, usize>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Session::default()
    }

    /// Gets the instance resolved for a name in this session.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DynSvc> {
        self.index.get(name).map(|&slot| &self.arena[slot].1)
    }

    /// Returns whether a name already has an instance in this session.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Seeds the session with an instance. Seeded instances take priority
    /// over registered components when wiring.
    ///
    /// If the name was already present, the previous instance is replaced and
    /// returned. It is no longer part of the session, so the caller must hand
    /// it to [`Container::release`](crate::Container::release) to give a
    /// pooled instance back. [`Scope::seed`](crate::Scope::seed) does this
    /// automatically.
    pub fn insert(
        &mut self,
        name: impl Into<ComponentName>,
        instance: DynSvc,
    ) -> Option<DynSvc> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => {
                Some(std::mem::replace(&mut self.arena[slot].1, instance))
            }
            None => {
                self.reserve(name, instance);
                None
            }
        }
    }

    /// Records the identity of a component before its fields are wired.
    pub(crate) fn reserve(&mut self, name: ComponentName, instance: DynSvc) {
        debug_assert!(!self.index.contains_key(&name));
        self.index.insert(name.clone(), self.arena.len());
        self.arena.push((name, instance));
    }

    /// Gets the number of components in this session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns whether this session holds no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Iterates over the components in the order they were reserved.
    pub fn iter(&self) -> impl Iterator<Item = (&ComponentName, &DynSvc)> {
        self.arena.iter().map(|(name, instance)| (name, instance))
    }

    /// Removes every component from the session, in the order they were
    /// reserved.
    pub fn drain(&mut self) -> impl Iterator<Item = (ComponentName, DynSvc)> + '_ {
        self.index.clear();
        self.arena.drain(..)
    }
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.arena.iter().map(|(name, _)| name.as_str()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Svc;

    #[test]
    fn reserve_then_get_returns_same_instance() {
        let mut session = Session::new();
        let instance: DynSvc = Svc::new(1_u8);

        session.reserve("a".into(), instance.clone());

        assert!(session.contains("a"));
        assert!(Svc::ptr_eq(&instance, session.get("a").unwrap()));
        assert_eq!(None, session.get("b").map(|_| ()));
    }

    #[test]
    fn insert_replaces_existing_entries() {
        let mut session = Session::new();
        let first: DynSvc = Svc::new(1_u8);
        let second: DynSvc = Svc::new(2_u8);

        assert!(session.insert("a", first.clone()).is_none());
        let replaced = session.insert("a", second.clone()).unwrap();

        assert!(Svc::ptr_eq(&first, &replaced));
        assert!(Svc::ptr_eq(&second, session.get("a").unwrap()));
        assert_eq!(1, session.len());
    }

    #[test]
    fn drain_empties_in_reservation_order() {
        let mut session = Session::new();
        session.insert("b", Svc::new(1_u8));
        session.insert("a", Svc::new(2_u8));

        let names: Vec<_> = session.drain().map(|(name, _)| name).collect();

        assert_eq!(vec![ComponentName::from("b"), "a".into()], names);
        assert!(session.is_empty());
        assert!(!session.contains("a"));
    }
}
