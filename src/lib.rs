//! Named object-graph dependency injection.
//!
//! Components are registered in a [`Container`] under a name, and declare
//! which of their fields the container fills in. Asking the container for a
//! name returns that component with every dependency wired in, recursively,
//! including dependency cycles.
//!
//! # Wiring
//!
//! A component's injectable fields are [`Inject`] slots, listed in the
//! component's [`Wiring`] table. A slot can be bound to a component name
//! directly, or through a struct-tag style annotation:
//!
//! ```text
//! container:"autowire:true;resource:user_repository"
//! ```
//!
//! The `container`, `autowire` and `resource` keywords can all be changed
//! through the [`Config`]. A field is only filled in when it is auto-wired,
//! either explicitly or because the container auto-wires by default.
//!
//! # Lifecycles
//!
//! Every component of a container shares the same lifecycle:
//!
//! - Singleton: each name is bound to one instance, which is wired the first
//!   time it is resolved. Every resolution returns that instance.
//! - Pooled: each name is bound to a [`Pool`] of instances. Every
//!   [`Session`] borrows its own instances, and gives them back when it is
//!   released.
//!
//! A session holds the components taking part in one resolution, so that a
//! name resolves to the same instance everywhere in the graph. Sessions must
//! be released once the caller is done with them, which a [`Scope`] does
//! automatically.
//!
//! # Interfaces
//!
//! Slots can hold trait objects as well as concrete types. The component
//! types implementing a trait are declared with the [`interface!`] macro,
//! which lets the container check and convert components bound to such a
//! slot.
//!
//! # Example
//!
//! ```
//! use graph_injector::{
//!     interface, Component, Config, ContainerBuilder, Inject, LifecycleMode,
//!     Pool, Wiring,
//! };
//! use std::error::Error;
//!
//! trait UserRepository: Send + Sync {
//!     fn find(&self, id: u32) -> Option<String>;
//! }
//!
//! #[derive(Default)]
//! struct MemoryUserRepository;
//! impl Component for MemoryUserRepository {}
//!
//! impl UserRepository for MemoryUserRepository {
//!     fn find(&self, id: u32) -> Option<String> {
//!         (id == 1).then(|| "admin".to_owned())
//!     }
//! }
//!
//! interface!(UserRepository = [MemoryUserRepository]);
//!
//! #[derive(Default)]
//! struct UserController {
//!     users: Inject<dyn UserRepository>,
//! }
//!
//! impl Component for UserController {
//!     fn wiring() -> Wiring<Self> {
//!         Wiring::new().tagged(
//!             "users",
//!             r#"container:"autowire:true;resource:user_repository""#,
//!             |c: &Self| &c.users,
//!         )
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     let config = Config::default().with_mode(LifecycleMode::Pooled);
//!     let mut builder = ContainerBuilder::new(config);
//!     builder.register_multi_instance(
//!         "user_repository",
//!         Pool::<MemoryUserRepository>::default(),
//!     )?;
//!     builder.register_multi_instance(
//!         "user_controller",
//!         Pool::<UserController>::default(),
//!     )?;
//!
//!     let container = builder.build();
//!     container.self_check()?;
//!
//!     // Everything resolved through the scope goes back to the pools when
//!     // the scope is dropped
//!     let mut scope = container.scope();
//!     let controller = scope.get::<UserController>("user_controller")?;
//!     let users = controller.users.get().ok_or("not wired")?;
//!     assert_eq!(Some("admin".to_owned()), users.find(1));
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::needless_pass_by_value
)]

mod builder;
mod config;
mod container;
mod lifecycle;
mod registry;
mod services;
mod session;
mod tag;

pub use builder::*;
pub use config::*;
pub use container::*;
pub(crate) use lifecycle::*;
pub(crate) use registry::*;
pub use services::*;
pub use session::*;
pub use tag::*;

#[cfg(test)]
mod tests;
