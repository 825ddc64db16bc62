//! Lifecycle strategies. A container picks one strategy when it is built,
//! and every registration, resolution and release goes through it.

mod pooled;
mod singleton;

pub(crate) use pooled::*;
pub(crate) use singleton::*;

use crate::{
    ComponentName, DynSvc, ErasedPool, InjectError, InjectResult,
    LifecycleMode, Registration, Resolver, SelfCheckError, Session,
};
use std::{any::TypeId, fmt::Debug};

pub(crate) trait Lifecycle: Send + Sync + Debug {
    fn mode(&self) -> LifecycleMode;

    /// Registers a single shared instance.
    fn register_instance(
        &mut self,
        _name: ComponentName,
        _registration: Registration,
        _instance: DynSvc,
    ) -> InjectResult<()> {
        Err(InjectError::WrongLifecycle {
            requested: LifecycleMode::Singleton,
            mode: self.mode(),
        })
    }

    /// Registers a pool of instances.
    fn register_pool(
        &mut self,
        _name: ComponentName,
        _registration: Registration,
        _pool: Box<dyn ErasedPool>,
    ) -> InjectResult<()> {
        Err(InjectError::WrongLifecycle {
            requested: LifecycleMode::Pooled,
            mode: self.mode(),
        })
    }

    fn registration(&self, name: &str) -> Option<&Registration>;

    fn registrations(
        &self,
    ) -> Box<dyn Iterator<Item = (&ComponentName, &Registration)> + '_>;

    /// Borrows an instance to inspect without wiring it.
    fn specimen(&self, name: &str) -> Option<Specimen<'_>>;

    /// Produces a wired instance for a name missing from the session.
    fn resolve(
        &self,
        resolver: &Resolver<'_>,
        name: &str,
        session: &mut Session,
    ) -> InjectResult<DynSvc>;

    /// Like [`Lifecycle::resolve`], for resolutions started by a caller
    /// rather than by the wiring of another component.
    fn resolve_root(
        &self,
        resolver: &Resolver<'_>,
        name: &str,
        session: &mut Session,
    ) -> InjectResult<DynSvc> {
        self.resolve(resolver, name, session)
    }

    /// Gives an instance back once its session is over.
    fn release(&self, name: &str, instance: DynSvc);

    /// Runs after a successful self-check.
    fn warm_up(&self, _resolver: &Resolver<'_>) -> Result<(), SelfCheckError> {
        Ok(())
    }

    fn contains(&self, name: &str) -> bool;

    fn names(&self) -> Vec<ComponentName> {
        self.registrations().map(|(name, _)| name.clone()).collect()
    }

    /// Finds the registration of a concrete type.
    fn registration_of(&self, type_id: TypeId) -> Option<&Registration> {
        self.registrations()
            .map(|(_, registration)| registration)
            .find(|registration| registration.info.id() == type_id)
    }
}

/// An instance borrowed for inspection. Instances borrowed from a pool go
/// back to it when the specimen is dropped.
pub(crate) struct Specimen<'a> {
    instance: DynSvc,
    wired: bool,
    pool: Option<&'a dyn ErasedPool>,
}

impl<'a> Specimen<'a> {
    pub fn shared(instance: DynSvc, wired: bool) -> Self {
        Specimen {
            instance,
            wired,
            pool: None,
        }
    }

    pub fn borrowed(pool: &'a dyn ErasedPool) -> Self {
        Specimen {
            instance: pool.get_dyn(),
            wired: false,
            pool: Some(pool),
        }
    }

    pub fn instance(&self) -> &DynSvc {
        &self.instance
    }

    /// Returns whether the container already wired this instance.
    pub fn is_wired(&self) -> bool {
        self.wired
    }
}

impl Drop for Specimen<'_> {
    fn drop(&mut self) {
        if let Some(pool) = self.pool {
            drop(pool.put_dyn(self.instance.clone()));
        }
    }
}
