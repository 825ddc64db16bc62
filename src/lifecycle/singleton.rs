use crate::{
    ComponentName, DynSvc, Entry, InjectError, InjectResult, Lifecycle,
    LifecycleMode, Registration, Registry, Resolver, SelfCheckError, Session,
    Specimen, Svc,
};
use std::{
    fmt::{Debug, Formatter},
    sync::{Mutex, OnceLock, PoisonError},
};
use tracing::debug;

pub(crate) struct SingletonEntry {
    registration: Registration,
    instance: DynSvc,
    initialized: OnceLock<DynSvc>,
}

impl Entry for SingletonEntry {
    fn registration(&self) -> &Registration {
        &self.registration
    }
}

/// Every name maps to one instance for the lifetime of the container. The
/// instance is wired the first time it is resolved, and marked initialized
/// with the rest of its graph once the whole resolution succeeds.
pub(crate) struct SingletonLifecycle {
    registry: Registry<SingletonEntry>,
    init_guard: Mutex<()>,
}

impl SingletonLifecycle {
    pub fn new() -> Self {
        SingletonLifecycle {
            registry: Registry::new(),
            init_guard: Mutex::new(()),
        }
    }

    fn entry(&self, name: &str) -> InjectResult<&SingletonEntry> {
        self.registry
            .get(name)
            .ok_or_else(|| InjectError::NotRegistered { name: name.into() })
    }
}

impl Lifecycle for SingletonLifecycle {
    fn mode(&self) -> LifecycleMode {
        LifecycleMode::Singleton
    }

    fn register_instance(
        &mut self,
        name: ComponentName,
        registration: Registration,
        instance: DynSvc,
    ) -> InjectResult<()> {
        self.registry.insert(
            name,
            SingletonEntry {
                registration,
                instance,
                initialized: OnceLock::new(),
            },
        )
    }

    fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    fn registration(&self, name: &str) -> Option<&Registration> {
        self.registry.get(name).map(Entry::registration)
    }

    fn registrations(
        &self,
    ) -> Box<dyn Iterator<Item = (&ComponentName, &Registration)> + '_> {
        Box::new(
            self.registry
                .iter()
                .map(|(name, entry)| (name, entry.registration())),
        )
    }

    fn specimen(&self, name: &str) -> Option<Specimen<'_>> {
        self.registry
            .get(name)
            .map(|entry| {
                Specimen::shared(
                    entry.instance.clone(),
                    entry.initialized.get().is_some(),
                )
            })
    }

    fn resolve(
        &self,
        resolver: &Resolver<'_>,
        name: &str,
        session: &mut Session,
    ) -> InjectResult<DynSvc> {
        let entry = self.entry(name)?;
        if let Some(initialized) = entry.initialized.get() {
            return Ok(initialized.clone());
        }

        session.reserve(name.into(), entry.instance.clone());
        resolver.wire_fields(&entry.registration, &entry.instance, session)?;
        Ok(entry.instance.clone())
    }

    fn resolve_root(
        &self,
        resolver: &Resolver<'_>,
        name: &str,
        session: &mut Session,
    ) -> InjectResult<DynSvc> {
        if let Some(initialized) = self.entry(name)?.initialized.get() {
            return Ok(initialized.clone());
        }

        let _guard = self
            .init_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let start = session.len();
        let instance = self.resolve(resolver, name, session)?;

        // The graph is published only once the root is completely wired
        for (reserved, reserved_instance) in session.iter().skip(start) {
            let entry = match self.registry.get(reserved.as_str()) {
                Some(entry) => entry,
                None => continue,
            };
            if Svc::ptr_eq(&entry.instance, reserved_instance)
                && entry.initialized.set(entry.instance.clone()).is_ok()
            {
                debug!(component = %reserved, "singleton initialized");
            }
        }

        Ok(instance)
    }

    fn release(&self, _name: &str, _instance: DynSvc) {}

    fn warm_up(&self, resolver: &Resolver<'_>) -> Result<(), SelfCheckError> {
        for name in self.registry.names() {
            let mut session = Session::new();
            self.resolve_root(resolver, name.as_str(), &mut session)
                .map_err(|source| SelfCheckError::Resolve {
                    name: name.clone(),
                    source,
                })?;
        }

        Ok(())
    }
}

impl Debug for SingletonLifecycle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingletonLifecycle")
            .field("registry", &self.registry)
            .finish()
    }
}
