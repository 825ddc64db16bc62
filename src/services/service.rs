use crate::LifecycleMode;
use derive_more::{Display, Error};
use std::{
    any::{Any, TypeId},
    borrow::Borrow,
    sync::Arc,
};

/// A reference-counted pointer holding a component.
pub type Svc<T> = Arc<T>;

/// A reference-counted pointer holding a component of any type.
pub type DynSvc = Arc<dyn Any + Send + Sync>;

/// A result from attempting to register, resolve or wire a component.
pub type InjectResult<T> = Result<T, InjectError>;

/// Implemented automatically on types that are capable of being a component.
pub trait Service: Any + Send + Sync {}
impl<T: ?Sized + Any + Send + Sync> Service for T {}

/// Type information about a component or slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ServiceInfo {
    id: TypeId,
    name: &'static str,
}

impl ServiceInfo {
    /// Creates a [`ServiceInfo`] for the given type.
    #[inline]
    #[must_use]
    pub fn of<T: ?Sized + Any>() -> Self {
        ServiceInfo {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Gets the [`TypeId`] for this type.
    #[inline]
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Gets the type name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns whether `service` holds a value of exactly this type.
    #[must_use]
    pub fn describes(&self, service: &DynSvc) -> bool {
        (**service).type_id() == self.id
    }
}

/// The name a component is registered under.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Display)]
pub struct ComponentName(String);

impl ComponentName {
    /// Creates a name. Names are checked when they are registered.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        ComponentName(name.into())
    }

    /// Gets the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fails if the name can't identify a component.
    pub fn validate(&self) -> InjectResult<()> {
        if self.0.is_empty() {
            return Err(InjectError::InvalidName);
        }

        Ok(())
    }
}

impl Borrow<str> for ComponentName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentName {
    fn from(name: &str) -> Self {
        ComponentName::new(name)
    }
}

impl From<String> for ComponentName {
    fn from(name: String) -> Self {
        ComponentName(name)
    }
}

impl From<&ComponentName> for ComponentName {
    fn from(name: &ComponentName) -> Self {
        name.clone()
    }
}

/// An error that has occurred while registering or resolving a component.
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum InjectError {
    /// The registration call doesn't match the container's lifecycle.
    #[display(
        fmt = "cannot register a {} component in a {} container",
        requested,
        mode
    )]
    WrongLifecycle {
        /// The lifecycle the registration call is meant for.
        requested: LifecycleMode,

        /// The lifecycle of the container.
        mode: LifecycleMode,
    },

    /// A component name was empty.
    #[display(fmt = "component name cannot be empty")]
    InvalidName,

    /// A component with the same name has already been registered.
    #[display(
        fmt = "component name {} already existed, cannot register \
               component with the same name",
        name
    )]
    DuplicateName {
        /// The name that was registered twice.
        name: ComponentName,
    },

    /// No component is registered under the requested name.
    #[display(fmt = "component not exist in container => {}", name)]
    NotRegistered {
        /// The requested name.
        name: ComponentName,
    },

    /// An auto-wired field has no component name bound to it.
    #[display(fmt = "{}.{} has no resource bound to it", component, field)]
    MissingResource {
        /// The type owning the field.
        component: &'static str,

        /// The field's name.
        field: &'static str,
    },

    /// An auto-wired field cannot be written by the container.
    #[display(fmt = "{}.{} is private and cannot be injected", component, field)]
    PrivateField {
        /// The type owning the field.
        component: &'static str,

        /// The field's name.
        field: &'static str,
    },

    /// The resolved component can't be used as the requested type.
    #[display(
        fmt = "component {} cannot be used as {}",
        name,
        "expected.name()"
    )]
    InvalidImplementation {
        /// The name of the resolved component.
        name: ComponentName,

        /// The type it was requested as.
        expected: ServiceInfo,
    },

    /// An instance handed to a wiring table was not of the table's type.
    #[display(
        fmt = "the instance is not a {}",
        "expected.name()"
    )]
    InvalidInstance {
        /// The type of the wiring table.
        expected: ServiceInfo,
    },
}
