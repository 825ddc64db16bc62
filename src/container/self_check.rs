use crate::{
    ComponentName, Container, ErasedWiring, FieldPlan, InjectError,
    Registration,
};
use derive_more::{Display, Error};
use tracing::{debug, error, info, warn};

/// Why a field of a registered component can't be wired.
#[derive(Clone, PartialEq, Eq, Debug, Display)]
#[non_exhaustive]
pub enum FieldDefect {
    /// The field is annotated, but no component name is bound to it.
    #[display(fmt = "the resource tag not exist in container")]
    ResourceTagMissing,

    /// The field is auto-wired, but the container can't write to it.
    #[display(fmt = "private param")]
    PrivateParam,

    /// The field is auto-wired, but already holds a value.
    #[display(fmt = "the param to be injected is not null")]
    NotNull,

    /// The bound component name is not registered.
    #[display(fmt = "resource name: {} not register in container", resource)]
    NotRegistered {
        /// The bound component name.
        resource: ComponentName,
    },

    /// The field holds a concrete type that differs from the bound
    /// component's type.
    #[display(
        fmt = "resource name: {} type not same, expected: {} actual: {}",
        resource,
        expected,
        actual
    )]
    TypeMismatch {
        /// The bound component name.
        resource: ComponentName,

        /// The type the field holds.
        expected: &'static str,

        /// The type of the bound component.
        actual: &'static str,
    },

    /// The field holds a trait object that the bound component does not
    /// implement.
    #[display(
        fmt = "resource name: {} type: {} not implement the interface {}",
        resource,
        actual,
        interface
    )]
    NotImplemented {
        /// The bound component name.
        resource: ComponentName,

        /// The type of the bound component.
        actual: &'static str,

        /// The interface the field holds.
        interface: &'static str,
    },
}

/// An error found while checking the registered components.
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum SelfCheckError {
    /// The checked name is not registered.
    #[display(fmt = "component not exist in container => {}", name)]
    NotRegistered {
        /// The checked name.
        name: ComponentName,
    },

    /// A field of a component can't be wired.
    #[display(
        fmt = "self check error: component: {} index: {} field: {}, {}",
        component,
        index,
        field,
        reason
    )]
    Field {
        /// The component owning the field.
        component: ComponentName,

        /// The position of the field in the component's wiring table.
        index: usize,

        /// The path of the field, as `Type.field.(Slot)`.
        field: String,

        /// What is wrong with the field.
        reason: FieldDefect,
    },

    /// A component passed the checks but failed to resolve.
    #[display(fmt = "component {} failed to resolve: {}", name, source)]
    Resolve {
        /// The component that failed.
        name: ComponentName,

        /// The resolution error.
        source: InjectError,
    },
}

impl Container {
    /// Checks every registered component, in name order, and stops at the
    /// first broken one.
    ///
    /// A component passes when every auto-wired field is bound to a
    /// registered component of a compatible type, is writable, and is still
    /// empty in the registered instance. In singleton mode every singleton is
    /// then resolved once, so later calls find it initialized.
    pub fn self_check(&self) -> Result<(), SelfCheckError> {
        for name in self.lifecycle().names() {
            match self.self_check_component(name.as_str()) {
                Ok(()) => info!(
                    "{:<8} {:<10} {:<7} => {}",
                    "[Container]", "[SelfCheck]", "[Success]", name
                ),
                Err(err) => {
                    error!(
                        "{:<8} {:<10} {:<7} => {}",
                        "[Container]", "[SelfCheck]", "[Failed]", err
                    );
                    return Err(err);
                }
            }
        }

        self.lifecycle().warm_up(&self.resolver())
    }

    /// Checks the wiring of one registered component.
    pub fn self_check_component(&self, name: &str) -> Result<(), SelfCheckError> {
        let lifecycle = self.lifecycle();
        let registration = lifecycle.registration(name).ok_or_else(|| {
            SelfCheckError::NotRegistered { name: name.into() }
        })?;
        let specimen = lifecycle.specimen(name).ok_or_else(|| {
            SelfCheckError::NotRegistered { name: name.into() }
        })?;

        let wiring = registration.wiring.as_ref();
        for plan in wiring.plans() {
            let defect = |reason: FieldDefect| SelfCheckError::Field {
                component: name.into(),
                index: plan.index,
                field: plan.path.clone(),
                reason,
            };

            if !plan.wiring.annotated {
                debug!(
                    component = name,
                    field = %plan.path,
                    "field not annotated, skipped"
                );
                continue;
            }

            let resource = plan
                .wiring
                .resource
                .as_ref()
                .ok_or_else(|| defect(FieldDefect::ResourceTagMissing))?;

            if !plan.wiring.auto_wire {
                if plan.writable {
                    warn!(
                        component = name,
                        field = %plan.path,
                        "field can be injected, but auto wire is disabled"
                    );
                }
                continue;
            }

            if !plan.writable {
                return Err(defect(FieldDefect::PrivateParam));
            }

            // Initialized singletons hold their dependencies already
            let vacant = specimen.is_wired()
                || wiring
                    .is_vacant(specimen.instance(), plan.index)
                    .map_err(|source| SelfCheckError::Resolve {
                        name: name.into(),
                        source,
                    })?;
            if !vacant {
                return Err(defect(FieldDefect::NotNull));
            }

            let target = lifecycle.registration(resource.as_str()).ok_or_else(
                || {
                    defect(FieldDefect::NotRegistered {
                        resource: resource.clone(),
                    })
                },
            )?;
            check_compatible(wiring, plan, resource, target).map_err(defect)?;
        }

        Ok(())
    }
}

fn check_compatible(
    wiring: &dyn ErasedWiring,
    plan: &FieldPlan,
    resource: &ComponentName,
    target: &Registration,
) -> Result<(), FieldDefect> {
    if wiring.accepts(plan.index, target.info) {
        return Ok(());
    }

    Err(if plan.contract {
        FieldDefect::NotImplemented {
            resource: resource.clone(),
            actual: target.info.name(),
            interface: plan.target.name(),
        }
    } else {
        FieldDefect::TypeMismatch {
            resource: resource.clone(),
            expected: plan.target.name(),
            actual: target.info.name(),
        }
    })
}
