//! Element handler definitions.

use std::sync::Arc;

use roxmltree::Node;

use super::core::SchemaRegistry;
use super::engine::build;
use super::types::{BuildContext, Outcome};
use crate::error::{FieldError, Result, WebXmlError};
use crate::xml::get_tag_name;

/// Mutation function that stores leaf text on a target.
pub type ApplyText<T> = fn(&mut T, String) -> std::result::Result<(), FieldError>;

/// Mutation function that stores a nested value on a target.
///
/// Whether this overwrites a field, appends to a list or inserts into a
/// keyed collection is up to the function; the engine calls it once per
/// matched element.
pub type ApplyValue<T, S> = fn(&mut T, S) -> std::result::Result<(), FieldError>;

/// Decides whether a freshly built nested value is present.
pub type Finish<S> = fn(S) -> Option<S>;

/// How one child element is turned into a value and applied to its parent.
pub enum ElementHandler<T> {
    /// Extract the element's text content and hand it to `apply`.
    LeafText { apply: ApplyText<T> },

    /// Build a nested value through another registry and apply it.
    Composite(Box<dyn NestedBuilder<T>>),
}

impl<T: 'static> ElementHandler<T> {
    /// Create a leaf text handler.
    #[must_use]
    pub fn leaf(apply: ApplyText<T>) -> Self {
        Self::LeafText { apply }
    }

    /// Create a composite handler whose value is always applied.
    #[must_use]
    pub fn composite<S: 'static>(registry: Arc<SchemaRegistry<S>>, apply: ApplyValue<T, S>) -> Self {
        Self::optional(registry, Some, apply)
    }

    /// Create a composite handler whose value is applied only when `finish`
    /// returns `Some`.
    #[must_use]
    pub fn optional<S: 'static>(
        registry: Arc<SchemaRegistry<S>>,
        finish: Finish<S>,
        apply: ApplyValue<T, S>,
    ) -> Self {
        Self::Composite(Box::new(Composite {
            registry,
            finish,
            apply,
        }))
    }

    /// Whether this handler terminates recursion with a text value.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::LeafText { .. })
    }
}

/// Type-erased composite step: build a nested value and apply it to `T`.
///
/// The nested type only exists inside the implementation, which lets one
/// registry hold composite handlers for many different child types.
pub trait NestedBuilder<T>: Send + Sync {
    /// Name of the nested target type, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// Build the nested value from `node` and apply it to `target`.
    ///
    /// `owner` names the type of `target`; it is attached to a mutation
    /// failure so the error points at the containing type.
    fn build_into(
        &self,
        owner: &'static str,
        target: &mut T,
        node: Node<'_, '_>,
        context: &mut BuildContext,
    ) -> Result<Outcome>;
}

struct Composite<T, S> {
    registry: Arc<SchemaRegistry<S>>,
    finish: Finish<S>,
    apply: ApplyValue<T, S>,
}

impl<T, S> NestedBuilder<T> for Composite<T, S> {
    fn type_name(&self) -> &'static str {
        self.registry.type_name()
    }

    fn build_into(
        &self,
        owner: &'static str,
        target: &mut T,
        node: Node<'_, '_>,
        context: &mut BuildContext,
    ) -> Result<Outcome> {
        let value = build(&self.registry, node, context)?;

        let Some(value) = (self.finish)(value) else {
            tracing::debug!(
                tag = %get_tag_name(node),
                owner,
                "Nested value is absent, not applied"
            );
            context.record_skip();
            return Ok(Outcome::Skipped);
        };

        (self.apply)(target, value).map_err(|source| WebXmlError::MutationFailure {
            tag_name: get_tag_name(node).to_string(),
            type_name: owner,
            source,
        })?;

        Ok(Outcome::Applied)
    }
}
