//! Error types for descriptor binding.
//!
//! Uses the dual-error pattern: `WebXmlError` for library consumers with
//! element context, and `FieldError` for the mutation functions registered
//! in a schema, which know nothing about the element that drove them.

use thiserror::Error;

/// Main error type for the webxml library.
#[derive(Debug, Error)]
pub enum WebXmlError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// The document has no element with the expected root tag.
    #[error("No <{root}> element found")]
    MissingRootElement { root: String },

    /// A child element has no handler in the active registry.
    #[error("Don't know how to process <{tag_name}> using {type_name}")]
    UnrecognizedElement {
        tag_name: String,
        type_name: &'static str,
    },

    /// The target's mutation function rejected the value built for an element.
    #[error("Failed to apply <{tag_name}> to {type_name}: {source}")]
    MutationFailure {
        tag_name: String,
        type_name: &'static str,
        #[source]
        source: FieldError,
    },

    /// A tag was registered twice in the same registry.
    #[error("Duplicate handler for <{tag_name}> in {type_name} schema")]
    DuplicateHandler {
        tag_name: String,
        type_name: &'static str,
    },

    /// Element nesting is deeper than the configured limit.
    #[error("Element <{tag_name}> exceeds maximum nesting depth of {max_depth}")]
    DepthLimitExceeded { tag_name: String, max_depth: usize },

    /// Input document is larger than the configured limit.
    #[error("Document is {size} bytes, exceeding the limit of {max} bytes")]
    DocumentTooLarge { size: u64, max: u64 },

    /// Invalid parse option.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Failure reported by a registered mutation function.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Leaf text could not be parsed as an integer.
    #[error("invalid integer '{value}': {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A keyed entry is missing the child that provides its key.
    #[error("missing required <{0}>")]
    MissingKey(&'static str),

    /// A keyed collection already holds an entry for this key.
    #[error("duplicate entry for '{0}'")]
    DuplicateKey(String),
}

/// Result type alias for webxml operations.
pub type Result<T> = std::result::Result<T, WebXmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_element_display() {
        let err = WebXmlError::UnrecognizedElement {
            tag_name: "security-role".to_string(),
            type_name: "WebAppConfiguration",
        };
        assert_eq!(
            err.to_string(),
            "Don't know how to process <security-role> using WebAppConfiguration"
        );
    }

    #[test]
    fn test_missing_root_display() {
        let err = WebXmlError::MissingRootElement {
            root: "web-app".to_string(),
        };
        assert_eq!(err.to_string(), "No <web-app> element found");
    }

    #[test]
    fn test_mutation_failure_keeps_source() {
        let source = "abc".parse::<i32>().unwrap_err();
        let err = WebXmlError::MutationFailure {
            tag_name: "load-on-startup".to_string(),
            type_name: "Servlet",
            source: FieldError::InvalidInteger {
                value: "abc".to_string(),
                source,
            },
        };
        let message = err.to_string();
        assert!(message.contains("<load-on-startup>"));
        assert!(message.contains("Servlet"));
        assert!(message.contains("'abc'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
