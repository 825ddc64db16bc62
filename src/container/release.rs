use crate::{Container, DynSvc, ErasedWiring, Session};
use tracing::debug;

/// Empties every field the container fills in, one level deep. Returns the
/// number of fields cleared.
pub(crate) fn free(wiring: &dyn ErasedWiring, instance: &DynSvc) -> usize {
    let mut cleared = 0;
    for plan in wiring.plans() {
        if !plan.wiring.is_injected() || !plan.writable {
            continue;
        }

        if wiring.clear(instance, plan.index).is_ok() {
            cleared += 1;
        }
    }

    cleared
}

impl Container {
    /// Gives an instance back to the container once the caller is done
    /// with it.
    ///
    /// Singletons are never released. A pooled instance has its injected
    /// fields emptied and goes back to the pool of `name`. An instance whose
    /// type differs from the pool's type is logged and dropped instead, as is
    /// an instance released under an unknown name.
    pub fn release(&self, name: &str, instance: DynSvc) {
        self.lifecycle().release(name, instance);
    }

    /// Releases every component of a session and leaves it empty.
    pub fn release_session(&self, session: &mut Session) {
        let released = session.len();
        for (name, instance) in session.drain() {
            self.release(name.as_str(), instance);
        }

        debug!(released, "session released");
    }

    /// Empties every injected field of a registered component's instance,
    /// one level deep, and returns the number of fields cleared. Instances
    /// of types that were never registered are left alone.
    pub fn free(&self, instance: &DynSvc) -> usize {
        match self.lifecycle().registration_of((**instance).type_id()) {
            Some(registration) => free(registration.wiring.as_ref(), instance),
            None => {
                debug!("freed an instance of an unregistered type");
                0
            }
        }
    }
}
