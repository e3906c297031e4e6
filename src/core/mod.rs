//! Core types describing simulated bodies and the registry that owns them.

pub mod body;
pub mod registry;
pub mod types;

pub use body::Body;
pub use registry::BodyRegistry;
pub use types::{BodyKind, BodySnapshot, Capabilities};
