use crate::{DynSvc, Service, ServiceInfo, Svc};
use std::any::Any;

/// Indicates that a type can be the target of an injected field. Each sized
/// component type is an interface for itself, accepting only components of
/// exactly that type. Traits must be declared as interfaces explicitly with
/// the [`interface!`](crate::interface) macro, which lists the component
/// types implementing them.
pub trait Interface: Any {
    /// Whether this interface is a contract (a `dyn Trait`) rather than a
    /// concrete type.
    const IS_CONTRACT: bool;

    /// Returns whether a component of the given concrete type can be used as
    /// this interface.
    fn implemented_by(implementation: ServiceInfo) -> bool;

    /// Converts a component into this interface. If the component's type is
    /// not an implementation of this interface, it is handed back unchanged.
    fn downcast(service: DynSvc) -> Result<Svc<Self>, DynSvc>;
}

impl<T: Service> Interface for T {
    const IS_CONTRACT: bool = false;

    fn implemented_by(implementation: ServiceInfo) -> bool {
        implementation == ServiceInfo::of::<T>()
    }

    fn downcast(service: DynSvc) -> Result<Svc<Self>, DynSvc> {
        service.downcast()
    }
}

/// Marks a trait as being an interface for many other types. Fields of type
/// `Inject<dyn Trait>` can then be wired to any component whose concrete type
/// is listed here.
///
/// The trait needs `Send + Sync` supertraits, since components are shared
/// between threads.
///
/// # Example
/// ```
/// use graph_injector::{interface, Interface, ServiceInfo};
///
/// trait Foo: Send + Sync {}
///
/// struct Bar;
/// impl Foo for Bar {}
///
/// #[cfg(test)]
/// struct MockBar;
/// #[cfg(test)]
/// impl Foo for MockBar {}
///
/// // Note that attributes are allowed on each of the listed types.
/// interface!(
///     Foo = [
///         Bar,
///         #[cfg(test)]
///         MockBar,
///     ]
/// );
///
/// assert!(<dyn Foo>::implemented_by(ServiceInfo::of::<Bar>()));
/// assert!(!<dyn Foo>::implemented_by(ServiceInfo::of::<u8>()));
/// ```
#[macro_export]
macro_rules! interface {
    ($trait:path = [$($(#[$attr:meta])* $impl:ty),* $(,)?]) => {
        impl $crate::Interface for dyn $trait {
            const IS_CONTRACT: bool = true;

            fn implemented_by(implementation: $crate::ServiceInfo) -> bool {
                $(
                    $(#[$attr])*
                    {
                        if implementation == $crate::ServiceInfo::of::<$impl>() {
                            return true;
                        }
                    }
                )*

                false
            }

            #[allow(unused_mut)]
            fn downcast(
                service: $crate::DynSvc,
            ) -> ::std::result::Result<$crate::Svc<Self>, $crate::DynSvc> {
                let mut service = service;
                $(
                    $(#[$attr])*
                    {
                        service = match service.downcast::<$impl>() {
                            Ok(service) => return Ok(service as $crate::Svc<Self>),
                            Err(service) => service,
                        };
                    }
                )*

                Err(service)
            }
        }
    };
}
