//! Schema registry mapping tag names to handlers for one target type.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use super::handler::{ApplyText, ApplyValue, ElementHandler, Finish};
use crate::error::{Result, WebXmlError};

/// Registry mapping child tag names to handlers for target type `T`.
///
/// A registry is filled once while the schema is built and only read
/// afterwards. Tag names are case-sensitive and unique per registry.
pub struct SchemaRegistry<T> {
    type_name: &'static str,
    factory: fn() -> T,
    handlers: HashMap<String, ElementHandler<T>>,
}

impl<T: 'static> SchemaRegistry<T> {
    /// Create an empty registry for a target type.
    ///
    /// # Arguments
    /// * `type_name` - Name of the target type, used in error messages
    /// * `factory` - Creates a fresh, empty target for every element built
    #[must_use]
    pub fn new(type_name: &'static str, factory: fn() -> T) -> Self {
        Self {
            type_name,
            factory,
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for a specific tag name.
    ///
    /// # Errors
    /// Returns `DuplicateHandler` if the tag already has a handler.
    pub fn register(&mut self, tag_name: impl Into<String>, handler: ElementHandler<T>) -> Result<()> {
        let tag_name = tag_name.into();
        if self.handlers.contains_key(&tag_name) {
            return Err(WebXmlError::DuplicateHandler {
                tag_name,
                type_name: self.type_name,
            });
        }
        self.handlers.insert(tag_name, handler);
        Ok(())
    }

    /// Register a leaf handler that stores the element's text.
    pub fn register_leaf(&mut self, tag_name: impl Into<String>, apply: ApplyText<T>) -> Result<()> {
        self.register(tag_name, ElementHandler::leaf(apply))
    }

    /// Register a composite handler that builds through `registry`.
    pub fn register_composite<S: 'static>(
        &mut self,
        tag_name: impl Into<String>,
        registry: Arc<SchemaRegistry<S>>,
        apply: ApplyValue<T, S>,
    ) -> Result<()> {
        self.register(tag_name, ElementHandler::composite(registry, apply))
    }

    /// Register a composite handler whose value may be absent.
    pub fn register_optional<S: 'static>(
        &mut self,
        tag_name: impl Into<String>,
        registry: Arc<SchemaRegistry<S>>,
        finish: Finish<S>,
        apply: ApplyValue<T, S>,
    ) -> Result<()> {
        self.register(tag_name, ElementHandler::optional(registry, finish, apply))
    }
}

impl<T> SchemaRegistry<T> {
    /// Get the handler for a tag name.
    #[must_use]
    pub fn lookup(&self, tag_name: &str) -> Option<&ElementHandler<T>> {
        self.handlers.get(tag_name)
    }

    /// Check if a handler is registered for a tag.
    #[must_use]
    pub fn has_handler(&self, tag_name: &str) -> bool {
        self.handlers.contains_key(tag_name)
    }

    /// Return set of all registered tag names.
    #[must_use]
    pub fn registered_tags(&self) -> HashSet<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }

    /// Name of the target type this registry builds.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Number of registered tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no tags are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Create a fresh target through the registry's factory.
    pub(crate) fn instantiate(&self) -> T {
        (self.factory)()
    }
}

impl<T> fmt::Debug for SchemaRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("SchemaRegistry")
            .field("type_name", &self.type_name)
            .field("tags", &tags)
            .finish()
    }
}
