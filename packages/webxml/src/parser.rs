//! Document driver: find the root element and build the root target.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use roxmltree::{Document, ParsingOptions};

use crate::config::{validate_max_depth, ParseOptions};
use crate::error::{Result, WebXmlError};
use crate::registry::{build, BuildContext, SchemaRegistry};
use crate::xml::find_named_element;

/// Entry point that binds whole documents to a root target type.
///
/// Holds the root tag and the registry for the root type. Build it once
/// and share it by reference; every parse gets its own `BuildContext`
/// and target graph.
pub struct DocumentParser<T> {
    root_tag: String,
    registry: Arc<SchemaRegistry<T>>,
}

impl<T> DocumentParser<T> {
    /// Create a parser for documents whose root element is `root_tag`.
    #[must_use]
    pub fn new(root_tag: impl Into<String>, registry: Arc<SchemaRegistry<T>>) -> Self {
        Self {
            root_tag: root_tag.into(),
            registry,
        }
    }

    /// Tag name of the expected root element.
    #[must_use]
    pub fn root_tag(&self) -> &str {
        &self.root_tag
    }

    /// Registry for the root target type.
    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry<T> {
        &self.registry
    }

    /// Bind an already parsed document with default options.
    pub fn parse(&self, doc: &Document<'_>) -> Result<T> {
        self.parse_with(doc, &ParseOptions::default())
    }

    /// Bind an already parsed document.
    ///
    /// # Errors
    /// `InvalidOption` for a zero depth limit, `MissingRootElement` when the
    /// document's top-level element is not the expected root, otherwise any
    /// error from building the tree.
    pub fn parse_with(&self, doc: &Document<'_>, options: &ParseOptions) -> Result<T> {
        validate_max_depth(options.max_depth)?;
        let root = find_named_element(doc, &self.root_tag).ok_or_else(|| {
            WebXmlError::MissingRootElement {
                root: self.root_tag.clone(),
            }
        })?;

        let mut context = BuildContext::from_options(options);
        let target = build(&self.registry, root, &mut context)?;

        tracing::info!(
            root = %self.root_tag,
            elements = context.built(),
            skipped = context.skipped(),
            "Parsed document"
        );

        Ok(target)
    }

    /// Parse XML text and bind it.
    ///
    /// A `<!DOCTYPE>` declaration is accepted, as carried by descriptors
    /// written against the Servlet 2.2 and 2.3 DTDs.
    pub fn parse_str(&self, xml: &str, options: &ParseOptions) -> Result<T> {
        let size = xml.len() as u64;
        if size > options.max_document_size {
            return Err(WebXmlError::DocumentTooLarge {
                size,
                max: options.max_document_size,
            });
        }
        let doc = parse_document(xml)?;
        self.parse_with(&doc, options)
    }

    /// Read XML from a reader and bind it.
    ///
    /// Reads at most one byte past the size limit, so an oversized stream
    /// is rejected without being buffered completely.
    pub fn parse_reader<R: Read>(&self, reader: R, options: &ParseOptions) -> Result<T> {
        let mut bytes = Vec::new();
        reader
            .take(options.max_document_size.saturating_add(1))
            .read_to_end(&mut bytes)?;

        let size = bytes.len() as u64;
        if size > options.max_document_size {
            return Err(WebXmlError::DocumentTooLarge {
                size,
                max: options.max_document_size,
            });
        }

        let xml = String::from_utf8(bytes)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        self.parse_str(&xml, options)
    }

    /// Read an XML file and bind it.
    pub fn parse_file(&self, path: &Path, options: &ParseOptions) -> Result<T> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        if size > options.max_document_size {
            return Err(WebXmlError::DocumentTooLarge {
                size,
                max: options.max_document_size,
            });
        }
        tracing::debug!(path = %path.display(), size, "Reading document");
        self.parse_reader(file, options)
    }
}

/// Parse XML text into a tree, allowing a DTD declaration.
fn parse_document(xml: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(xml, options)?)
}
