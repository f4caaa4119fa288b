//! Type builder that populates a target by dispatching child elements.

use roxmltree::Node;

use super::core::SchemaRegistry;
use super::handler::ElementHandler;
use super::types::BuildContext;
use crate::error::{Result, WebXmlError};
use crate::xml::{element_children, get_tag_name, text_content};

/// Build a target from an element using the registry for its type.
///
/// A fresh target is created through the registry's factory, then every
/// direct child element is dispatched in document order: leaf handlers
/// receive the child's verbatim text, composite handlers recurse into
/// their own registry. Repeated tags produce one `apply` call each.
///
/// # Arguments
/// * `registry` - Registry for the target type of `node`
/// * `node` - Element whose children describe the target
/// * `context` - Per-parse build state
///
/// # Errors
/// Returns `UnrecognizedElement` for a child tag without a handler,
/// `MutationFailure` when a mutation function rejects a value, and
/// `DepthLimitExceeded` when nesting passes the configured limit. No
/// partially built target is ever returned.
pub fn build<T>(
    registry: &SchemaRegistry<T>,
    node: Node<'_, '_>,
    context: &mut BuildContext,
) -> Result<T> {
    context.enter(node)?;
    let result = build_children(registry, node, context);
    context.leave();
    let target = result?;

    tracing::debug!(
        tag = get_tag_name(node),
        type_name = registry.type_name(),
        "Built element"
    );

    Ok(target)
}

/// Instantiate a target and dispatch every child element of `node` into it.
fn build_children<T>(
    registry: &SchemaRegistry<T>,
    node: Node<'_, '_>,
    context: &mut BuildContext,
) -> Result<T> {
    let mut target = registry.instantiate();

    for child in element_children(node) {
        let tag_name = get_tag_name(child);

        let Some(handler) = registry.lookup(tag_name) else {
            return Err(WebXmlError::UnrecognizedElement {
                tag_name: tag_name.to_string(),
                type_name: registry.type_name(),
            });
        };

        tracing::trace!(tag = tag_name, owner = registry.type_name(), "Dispatching element");

        match handler {
            ElementHandler::LeafText { apply } => {
                apply(&mut target, text_content(child)).map_err(|source| {
                    WebXmlError::MutationFailure {
                        tag_name: tag_name.to_string(),
                        type_name: registry.type_name(),
                        source,
                    }
                })?;
            }
            ElementHandler::Composite(nested) => {
                nested.build_into(registry.type_name(), &mut target, child, context)?;
            }
        }
    }

    Ok(target)
}
