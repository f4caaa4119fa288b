//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::{Document, Node};

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use webxml::xml::get_tag_name;
///
/// let xml = r#"<web-app xmlns="http://java.sun.com/xml/ns/javaee"><servlet/></web-app>"#;
/// let doc = Document::parse(xml).unwrap();
/// let servlet = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(servlet), "servlet");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Get all element children of a node, in document order.
///
/// Text nodes, comments and processing instructions are excluded.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Concatenate all descendant text of a node in document order.
///
/// Whitespace is kept exactly as written; callers decide whether a value
/// needs trimming. CDATA sections are included, comments are not.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use webxml::xml::text_content;
///
/// let doc = Document::parse("<a> one <b>two</b> three </a>").unwrap();
/// assert_eq!(text_content(doc.root_element()), " one two three ");
/// ```
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Find the top-level element with the given tag name.
///
/// Only direct children of the document node are considered, so a
/// matching element nested inside some other root is not found.
pub fn find_named_element<'a, 'input>(
    doc: &'a Document<'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    doc.root().children().find(|child| has_tag(*child, tag))
}
