use crate::{
    Component, ComponentName, Config, Container, InjectResult, Lifecycle,
    LifecycleMode, Pool, PooledLifecycle, Registration, SingletonLifecycle, Svc,
};
use tracing::debug;

/// A builder for a [`Container`]. Every component is registered here before
/// the container is built, and the built container can't be changed.
#[derive(Debug)]
pub struct ContainerBuilder {
    config: Config,
    lifecycle: Box<dyn Lifecycle>,
}

impl ContainerBuilder {
    /// Creates a builder for a container with the given configuration. Empty
    /// keywords fall back to their defaults.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let config = config.normalized();
        let lifecycle: Box<dyn Lifecycle> = match config.mode {
            LifecycleMode::Singleton => Box::new(SingletonLifecycle::new()),
            LifecycleMode::Pooled => Box::new(PooledLifecycle::new()),
        };

        ContainerBuilder { config, lifecycle }
    }

    /// Registers a single shared instance of a component. The instance is
    /// wired the first time it is resolved, and every resolution returns it.
    ///
    /// Fails if the container is not in singleton mode, or if the name is
    /// empty or already registered.
    pub fn register_instance<T: Component>(
        &mut self,
        name: impl Into<ComponentName>,
        instance: Svc<T>,
    ) -> InjectResult<()> {
        let name = name.into();
        let registration = Registration::new(T::wiring().resolve(&self.config));
        self.lifecycle
            .register_instance(name.clone(), registration, instance)?;

        debug!(
            component = %name,
            service = std::any::type_name::<T>(),
            "instance registered"
        );
        Ok(())
    }

    /// Registers a pool of instances of a component. Every session borrows
    /// its own instance from the pool.
    ///
    /// Fails if the container is not in pooled mode, or if the name is empty
    /// or already registered.
    pub fn register_multi_instance<T: Component>(
        &mut self,
        name: impl Into<ComponentName>,
        pool: Pool<T>,
    ) -> InjectResult<()> {
        let name = name.into();
        let registration = Registration::new(T::wiring().resolve(&self.config));
        self.lifecycle
            .register_pool(name.clone(), registration, Box::new(pool))?;

        debug!(
            component = %name,
            service = std::any::type_name::<T>(),
            "instance pool registered"
        );
        Ok(())
    }

    /// Returns whether a component is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lifecycle.contains(name)
    }

    /// Gets the lifecycle shared by every component of this container.
    #[must_use]
    pub fn mode(&self) -> LifecycleMode {
        self.lifecycle.mode()
    }

    /// Gets the configuration of the container being built.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the container.
    #[must_use]
    pub fn build(self) -> Container {
        Container::new_from_parts(self.config, self.lifecycle)
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        ContainerBuilder::new(Config::default())
    }
}
