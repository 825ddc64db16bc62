mod inject;
mod interface;
mod pool;
mod service;
mod wiring;

pub use inject::*;
pub use interface::*;
pub use pool::*;
pub use service::*;
pub use wiring::*;
