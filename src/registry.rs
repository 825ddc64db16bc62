use crate::{
    ComponentName, ErasedWiring, InjectError, InjectResult, ServiceInfo,
};
use std::{
    collections::BTreeMap,
    fmt::{Debug, Formatter},
};

/// What every registration knows about its component, whatever the
/// lifecycle: the concrete type and the resolved wiring table.
pub(crate) struct Registration {
    pub info: ServiceInfo,
    pub wiring: Box<dyn ErasedWiring>,
}

impl Registration {
    pub fn new(wiring: Box<dyn ErasedWiring>) -> Self {
        Registration {
            info: wiring.component(),
            wiring,
        }
    }
}

/// Implemented by the entries stored in a [`Registry`].
pub(crate) trait Entry: Send + Sync {
    fn registration(&self) -> &Registration;
}

/// Named registrations of one lifecycle mode.
pub(crate) struct Registry<E: Entry> {
    entries: BTreeMap<ComponentName, E>,
}

impl<E: Entry> Registry<E> {
    pub fn new() -> Self {
        Registry {
            entries: BTreeMap::new(),
        }
    }

    /// Fails if the name is empty or taken.
    pub fn check_available(&self, name: &ComponentName) -> InjectResult<()> {
        name.validate()?;
        if self.entries.contains_key(name) {
            return Err(InjectError::DuplicateName { name: name.clone() });
        }

        Ok(())
    }

    /// Adds an entry. Fails if the name is empty or taken.
    pub fn insert(&mut self, name: ComponentName, entry: E) -> InjectResult<()> {
        self.check_available(&name)?;
        self.entries.insert(name, entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&E> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &ComponentName> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ComponentName, &E)> {
        self.entries.iter()
    }
}

impl<E: Entry> Debug for Registry<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, entry)| {
                (name.as_str(), entry.registration().info.name())
            }))
            .finish()
    }
}
