use crate::{
    DynSvc, InjectError, InjectResult, Lifecycle, Registration, Session,
};

/// Builds object graphs on top of a lifecycle strategy.
pub(crate) struct Resolver<'c> {
    lifecycle: &'c dyn Lifecycle,
}

impl<'c> Resolver<'c> {
    pub fn new(lifecycle: &'c dyn Lifecycle) -> Self {
        Resolver { lifecycle }
    }

    /// Resolves a name requested by a caller.
    pub fn resolve_root(
        &self,
        name: &str,
        session: &mut Session,
    ) -> InjectResult<DynSvc> {
        if let Some(instance) = session.get(name) {
            return Ok(instance.clone());
        }

        self.lifecycle.resolve_root(self, name, session)
    }

    /// Resolves a name requested while wiring another component.
    pub fn resolve(
        &self,
        name: &str,
        session: &mut Session,
    ) -> InjectResult<DynSvc> {
        if let Some(instance) = session.get(name) {
            return Ok(instance.clone());
        }

        self.lifecycle.resolve(self, name, session)
    }

    /// Fills every auto-wired field of `instance`, reusing the session's
    /// instances and resolving the missing ones.
    pub fn wire_fields(
        &self,
        registration: &Registration,
        instance: &DynSvc,
        session: &mut Session,
    ) -> InjectResult<()> {
        let wiring = registration.wiring.as_ref();
        for plan in wiring.plans() {
            if !plan.wiring.is_injected() {
                continue;
            }

            let resource = plan.wiring.resource.as_ref().ok_or(
                InjectError::MissingResource {
                    component: registration.info.name(),
                    field: plan.name,
                },
            )?;
            if !plan.writable {
                return Err(InjectError::PrivateField {
                    component: registration.info.name(),
                    field: plan.name,
                });
            }

            let dependency = self.resolve(resource.as_str(), session)?;
            wiring.assign(instance, plan.index, dependency).map_err(|_| {
                InjectError::InvalidImplementation {
                    name: resource.clone(),
                    expected: plan.target,
                }
            })?;
        }

        Ok(())
    }
}
