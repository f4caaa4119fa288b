//! Configuration constants and parse options.

use crate::error::{Result, WebXmlError};

/// Tag name of the deployment descriptor root element.
pub const WEB_APP_ROOT_TAG: &str = "web-app";

/// Default maximum element nesting depth, counted from the root element.
///
/// Deployment descriptors nest four levels at most; the headroom only
/// matters for hostile input.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default maximum size in bytes of a descriptor (16 MB).
pub const DEFAULT_MAX_DOCUMENT_SIZE: u64 = 16 * 1024 * 1024;

/// Limits applied to a single parse.
///
/// `DocumentParser::parse_with` rejects a zero `max_depth` through
/// [`validate_max_depth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest element (root = 1) the builder will descend into.
    pub max_depth: usize,

    /// Largest document, in bytes, accepted by the text, reader and file
    /// entry points.
    pub max_document_size: u64,
}

impl ParseOptions {
    /// Create options with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
        }
    }

    /// Set the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum document size.
    #[must_use]
    pub fn with_max_document_size(mut self, max_document_size: u64) -> Self {
        self.max_document_size = max_document_size;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a maximum nesting depth.
///
/// # Examples
/// ```
/// use webxml::config::validate_max_depth;
///
/// assert!(validate_max_depth(8).is_ok());
/// assert!(validate_max_depth(0).is_err());
/// ```
pub fn validate_max_depth(max_depth: usize) -> Result<()> {
    if max_depth == 0 {
        return Err(WebXmlError::InvalidOption(
            "max depth must be at least 1".to_string(),
        ));
    }
    Ok(())
}
