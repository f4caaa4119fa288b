//! Types for the schema registry system.

use std::fmt;

use roxmltree::Node;

use crate::config::ParseOptions;
use crate::error::{Result, WebXmlError};
use crate::xml::get_tag_name;

/// Result of dispatching one composite element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The nested value was built and handed to the parent's mutation function.
    Applied,
    /// The nested value was built but judged absent; nothing was applied.
    Skipped,
}

/// State carried through one document build.
///
/// Each parse owns its own context, so registries stay read-only and can
/// be shared between concurrent parses.
pub struct BuildContext {
    /// Nesting depth of the element currently being built (root = 1).
    depth: usize,

    /// Deepest element the builder may descend into.
    max_depth: usize,

    /// Number of elements built so far, including the root.
    built: usize,

    /// Number of composite values skipped as absent.
    skipped: usize,
}

impl BuildContext {
    /// Create a context with the given depth limit.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
            built: 0,
            skipped: 0,
        }
    }

    /// Create a context from parse options.
    #[must_use]
    pub fn from_options(options: &ParseOptions) -> Self {
        Self::new(options.max_depth)
    }

    /// Step into an element, failing if it is too deep.
    pub(crate) fn enter(&mut self, node: Node<'_, '_>) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(WebXmlError::DepthLimitExceeded {
                tag_name: get_tag_name(node).to_string(),
                max_depth: self.max_depth,
            });
        }
        self.depth += 1;
        self.built += 1;
        Ok(())
    }

    /// Step back out of the element entered last.
    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of elements built so far.
    #[must_use]
    pub fn built(&self) -> usize {
        self.built
    }

    /// Number of composite values skipped as absent.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::from_options(&ParseOptions::default())
    }
}

impl fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildContext")
            .field("depth", &self.depth)
            .field("max_depth", &self.max_depth)
            .field("built", &self.built)
            .field("skipped", &self.skipped)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_context_tracks_depth() {
        let doc = Document::parse("<a/>").unwrap();
        let node = doc.root_element();
        let mut context = BuildContext::new(2);

        context.enter(node).unwrap();
        context.enter(node).unwrap();
        assert_eq!(context.depth(), 2);
        assert_eq!(context.built(), 2);

        context.leave();
        assert_eq!(context.depth(), 1);
    }

    #[test]
    fn test_context_rejects_too_deep() {
        let doc = Document::parse("<deep/>").unwrap();
        let mut context = BuildContext::new(1);

        context.enter(doc.root_element()).unwrap();
        let err = context.enter(doc.root_element()).unwrap_err();
        assert!(matches!(
            err,
            WebXmlError::DepthLimitExceeded { ref tag_name, max_depth: 1 } if tag_name == "deep"
        ));
    }

    #[test]
    fn test_context_default_uses_options() {
        let context = BuildContext::default();
        assert_eq!(context.depth(), 0);
        assert_eq!(context.skipped(), 0);
    }
}
