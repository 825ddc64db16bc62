use crate::{
    free, ComponentName, DynSvc, Entry, ErasedPool, InjectError, InjectResult,
    Lifecycle, LifecycleMode, Registration, Registry, Resolver, ServiceInfo,
    Session, Specimen,
};
use std::fmt::{Debug, Formatter};
use tracing::{debug, error};

pub(crate) struct PooledEntry {
    registration: Registration,
    pool: Box<dyn ErasedPool>,
    witness: ServiceInfo,
}

impl Entry for PooledEntry {
    fn registration(&self) -> &Registration {
        &self.registration
    }
}

/// Every session borrows its own instances from the pools, and gives them
/// back when it is released.
pub(crate) struct PooledLifecycle {
    registry: Registry<PooledEntry>,
}

impl PooledLifecycle {
    pub fn new() -> Self {
        PooledLifecycle {
            registry: Registry::new(),
        }
    }
}

impl Lifecycle for PooledLifecycle {
    fn mode(&self) -> LifecycleMode {
        LifecycleMode::Pooled
    }

    fn register_pool(
        &mut self,
        name: ComponentName,
        registration: Registration,
        pool: Box<dyn ErasedPool>,
    ) -> InjectResult<()> {
        self.registry.check_available(&name)?;
        let witness = pool.probe();
        self.registry.insert(
            name,
            PooledEntry {
                registration,
                pool,
                witness,
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
            .map(|entry| Specimen::borrowed(entry.pool.as_ref()))
    }

    fn resolve(
        &self,
        resolver: &Resolver<'_>,
        name: &str,
        session: &mut Session,
    ) -> InjectResult<DynSvc> {
        let entry = self
            .registry
            .get(name)
            .ok_or_else(|| InjectError::NotRegistered { name: name.into() })?;

        let instance = entry.pool.get_dyn();
        session.reserve(name.into(), instance.clone());
        resolver.wire_fields(&entry.registration, &instance, session)?;
        Ok(instance)
    }

    fn release(&self, name: &str, instance: DynSvc) {
        let entry = match self.registry.get(name) {
            Some(entry) => entry,
            None => {
                error!(
                    component = name,
                    "instance release failed, not exist in container"
                );
                return;
            }
        };

        // Instances of the wrong type are dropped instead of being pooled
        if !entry.witness.describes(&instance) {
            error!(
                component = name,
                expected = entry.witness.name(),
                "released wrong types instance to instance pool"
            );
            return;
        }

        let cleared = free(entry.registration.wiring.as_ref(), &instance);
        if entry.pool.put_dyn(instance).is_err() {
            error!(component = name, "instance pool rejected the released instance");
            return;
        }

        debug!(
            component = name,
            cleared,
            idle = entry.pool.idle(),
            "instance released"
        );
    }
}

impl Debug for PooledLifecycle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledLifecycle")
            .field("registry", &self.registry)
            .finish()
    }
}
