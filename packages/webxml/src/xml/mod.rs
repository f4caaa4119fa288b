//! XML utilities over `roxmltree` element trees.

mod utils;

pub use utils::{element_children, find_named_element, get_tag_name, has_tag, text_content};
