use crate::{
    ComponentName, Container, DynSvc, InjectResult, Interface, Session, Svc,
};

/// A session tied to a container. Every component resolved through the
/// scope is released when the scope is dropped, including on early returns
/// and unwinding panics.
///
/// ```
/// use graph_injector::{
///     Component, Config, ContainerBuilder, LifecycleMode, Pool, Svc,
/// };
///
/// #[derive(Default)]
/// struct Connection;
/// impl Component for Connection {}
///
/// let config = Config::default().with_mode(LifecycleMode::Pooled);
/// let mut builder = ContainerBuilder::new(config);
/// builder
///     .register_multi_instance("connection", Pool::<Connection>::default())
///     .unwrap();
/// let container = builder.build();
///
/// let first = {
///     let mut scope = container.scope();
///     scope.get::<Connection>("connection").unwrap()
/// };
///
/// // The instance went back to the pool, so the next scope reuses it
/// let mut scope = container.scope();
/// let second = scope.get::<Connection>("connection").unwrap();
/// assert!(Svc::ptr_eq(&first, &second));
/// ```
#[derive(Debug)]
pub struct Scope<'c> {
    container: &'c Container,
    session: Session,
}

impl<'c> Scope<'c> {
    pub(crate) fn new(container: &'c Container) -> Self {
        Scope {
            container,
            session: Session::new(),
        }
    }

    /// Gets a fully wired instance of a component.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Container::get_instance`].
    #[must_use]
    pub fn get_instance(&mut self, name: &str) -> DynSvc {
        self.container.get_instance(name, &mut self.session)
    }

    /// Gets a fully wired instance of a component, returning resolution
    /// failures as errors.
    pub fn try_get_instance(&mut self, name: &str) -> InjectResult<DynSvc> {
        self.container.try_get_instance(name, &mut self.session)
    }

    /// Gets a fully wired instance of a component as the given interface.
    pub fn get<I: ?Sized + Interface>(
        &mut self,
        name: &str,
    ) -> InjectResult<Svc<I>> {
        self.container.get(name, &mut self.session)
    }

    /// Seeds the session of this scope with an instance. An instance already
    /// present under `name` is released through the container.
    pub fn seed(&mut self, name: impl Into<ComponentName>, instance: DynSvc) {
        let name = name.into();
        if let Some(replaced) = self.session.insert(name.clone(), instance) {
            self.container.release(name.as_str(), replaced);
        }
    }

    /// Gets the container this scope resolves from.
    #[must_use]
    pub fn container(&self) -> &'c Container {
        self.container
    }

    /// Gets the session of this scope.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the session of this scope mutably.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.container.release_session(&mut self.session);
    }
}
