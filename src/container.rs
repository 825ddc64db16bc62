mod release;
mod resolve;
mod scope;
mod self_check;

pub(crate) use release::*;
pub(crate) use resolve::*;
pub use scope::*;
pub use self_check::*;

use crate::{
    Config, ContainerBuilder, DynSvc, InjectError, InjectResult, Interface,
    Lifecycle, LifecycleMode, Session, Svc,
};

/// A container of named components. This holds every registration and
/// builds fully wired object graphs out of them on request.
///
/// Cloning the container does not clone the registrations. Both containers
/// share the same registrations, pools and singleton instances.
///
/// ```
/// use graph_injector::{Component, Container, Inject, Session, Svc, Wiring};
///
/// #[derive(Default)]
/// struct Repository;
/// impl Component for Repository {}
///
/// #[derive(Default)]
/// struct Controller {
///     repository: Inject<Repository>,
/// }
///
/// impl Component for Controller {
///     fn wiring() -> Wiring<Self> {
///         Wiring::new().bind("repository", "repository", |c: &Self| &c.repository)
///     }
/// }
///
/// let mut builder = Container::builder();
/// builder
///     .register_instance("repository", Svc::new(Repository))
///     .unwrap();
/// builder
///     .register_instance("controller", Svc::new(Controller::default()))
///     .unwrap();
///
/// let container = builder.build();
/// container.self_check().unwrap();
///
/// let mut session = Session::new();
/// let controller: Svc<Controller> =
///     container.get("controller", &mut session).unwrap();
/// assert!(controller.repository.get().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Container {
    inner: Svc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: Config,
    lifecycle: Box<dyn Lifecycle>,
}

impl Container {
    /// Creates a builder for a container with the default configuration.
    #[must_use]
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::default()
    }

    pub(crate) fn new_from_parts(
        config: Config,
        lifecycle: Box<dyn Lifecycle>,
    ) -> Self {
        Container {
            inner: Svc::new(Inner { config, lifecycle }),
        }
    }

    pub(crate) fn lifecycle(&self) -> &dyn Lifecycle {
        self.inner.lifecycle.as_ref()
    }

    pub(crate) fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.lifecycle())
    }

    /// Gets a fully wired instance of a component.
    ///
    /// If the session already holds an instance for `name`, that instance is
    /// returned. Otherwise the component is produced by its lifecycle and
    /// every auto-wired field is filled, recursively, through the same
    /// session. Components that are resolved along the way are added to the
    /// session, which must later be handed to
    /// [`release_session`](Container::release_session).
    ///
    /// # Panics
    ///
    /// Panics if the component or one of its dependencies is not registered,
    /// or if its wiring is broken. These are bootstrap bugs that
    /// [`self_check`](Container::self_check) reports ahead of time. Use
    /// [`try_get_instance`](Container::try_get_instance) to handle them as
    /// errors instead.
    #[must_use]
    pub fn get_instance(&self, name: &str, session: &mut Session) -> DynSvc {
        match self.try_get_instance(name, session) {
            Ok(instance) => instance,
            Err(error) => panic!("{}", error),
        }
    }

    /// Gets a fully wired instance of a component, returning resolution
    /// failures as errors.
    pub fn try_get_instance(
        &self,
        name: &str,
        session: &mut Session,
    ) -> InjectResult<DynSvc> {
        self.resolver().resolve_root(name, session)
    }

    /// Gets a fully wired instance of a component as the given interface.
    pub fn get<I: ?Sized + Interface>(
        &self,
        name: &str,
        session: &mut Session,
    ) -> InjectResult<Svc<I>> {
        let instance = self.try_get_instance(name, session)?;
        I::downcast(instance).map_err(|_| InjectError::InvalidImplementation {
            name: name.into(),
            expected: crate::ServiceInfo::of::<I>(),
        })
    }

    /// Returns whether a component is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lifecycle().contains(name)
    }

    /// Gets the lifecycle shared by every component of this container.
    #[must_use]
    pub fn mode(&self) -> LifecycleMode {
        self.lifecycle().mode()
    }

    /// Gets the configuration this container was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Starts a session that is released when the returned scope is dropped.
    #[must_use]
    pub fn scope(&self) -> Scope<'_> {
        Scope::new(self)
    }
}
