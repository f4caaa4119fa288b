//! Schema registry system for binding XML elements to typed targets.
//!
//! Each target type gets one `SchemaRegistry` that maps child tag names to
//! element handlers. Leaf handlers store text, composite handlers recurse
//! into the registry of a nested type. Registries are built once and then
//! only read, so one set can serve any number of parses.

mod core;
mod engine;
mod handler;
mod types;

pub use core::SchemaRegistry;
pub use engine::build;
pub use handler::{ApplyText, ApplyValue, ElementHandler, Finish, NestedBuilder};
pub use types::{BuildContext, Outcome};
