use crate::{DynSvc, Service, ServiceInfo, Svc};
use std::{
    fmt::{Debug, Formatter},
    sync::{Mutex, PoisonError},
};

/// A pool of reusable component instances, safe to share between threads.
///
/// Instances are created with the pool's factory whenever no idle instance is
/// available. Returned instances are kept for reuse, up to an optional limit.
///
/// ```
/// use graph_injector::{Pool, Svc};
///
/// let pool = Pool::new(|| String::from("fresh"));
/// let first = pool.get();
/// pool.put(first.clone());
///
/// let second = pool.get();
/// assert!(Svc::ptr_eq(&first, &second));
/// ```
pub struct Pool<T: Service> {
    idle: Mutex<Vec<Svc<T>>>,
    factory: Box<dyn Fn() -> T + Send + Sync>,
    max_idle: Option<usize>,
}

impl<T: Service> Pool<T> {
    /// Creates a pool that builds new instances with `factory`.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Pool {
            idle: Mutex::new(Vec::new()),
            factory: Box::new(factory),
            max_idle: None,
        }
    }

    /// Limits how many idle instances are kept. Instances returned to a full
    /// pool are dropped.
    #[must_use]
    pub fn with_max_idle(mut self, max_idle: usize) -> Self {
        self.max_idle = Some(max_idle);
        self
    }

    /// Takes an idle instance, or creates one if none is available.
    #[must_use]
    pub fn get(&self) -> Svc<T> {
        let idle = self
            .idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop();
        idle.unwrap_or_else(|| Svc::new((self.factory)()))
    }

    /// Returns an instance to the pool.
    pub fn put(&self, instance: Svc<T>) {
        let mut idle = self.idle.lock().unwrap_or_else(PoisonError::into_inner);
        if self.max_idle.map_or(true, |max_idle| idle.len() < max_idle) {
            idle.push(instance);
        }
    }

    /// Gets the number of idle instances.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<T: Service + Default> Default for Pool<T> {
    fn default() -> Self {
        Pool::new(T::default)
    }
}

impl<T: Service> Debug for Pool<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("type", &std::any::type_name::<T>())
            .field("idle", &self.idle())
            .field("max_idle", &self.max_idle)
            .finish()
    }
}

/// A pool with its component type erased.
pub(crate) trait ErasedPool: Send + Sync {
    /// Borrows one instance and returns it immediately, reporting the
    /// concrete type the pool produces.
    fn probe(&self) -> ServiceInfo;
    fn get_dyn(&self) -> DynSvc;
    fn put_dyn(&self, instance: DynSvc) -> Result<(), DynSvc>;
    fn idle(&self) -> usize;
}

impl<T: Service> ErasedPool for Pool<T> {
    fn probe(&self) -> ServiceInfo {
        let instance = self.get();
        self.put(instance);
        ServiceInfo::of::<T>()
    }

    fn get_dyn(&self) -> DynSvc {
        self.get()
    }

    fn put_dyn(&self, instance: DynSvc) -> Result<(), DynSvc> {
        self.put(instance.downcast()?);
        Ok(())
    }

    fn idle(&self) -> usize {
        Pool::idle(self)
    }
}
