//! webxml - Schema-driven binding of servlet deployment descriptors.
//!
//! This crate turns a parsed XML element tree into a typed configuration
//! graph. A schema is a set of registries, one per target type, mapping
//! child tag names to handlers; the engine walks the document and applies
//! them without any format-specific code of its own.
//!
//! # Example
//!
//! ```
//! use webxml::config::ParseOptions;
//! use webxml::webapp::create_web_app_schema;
//!
//! let schema = create_web_app_schema().unwrap();
//! let xml = r#"<web-app>
//!     <servlet>
//!         <servlet-name>hello</servlet-name>
//!         <servlet-class>com.example.Hello</servlet-class>
//!     </servlet>
//! </web-app>"#;
//!
//! let app = schema.parse_str(xml, &ParseOptions::default()).unwrap();
//! assert_eq!(app.servlets.len(), 1);
//! assert!(app.servlet("hello").is_some());
//! ```
//!
//! # Architecture
//!
//! - [`registry`]: Schema registries, element handlers and the type builder
//! - [`parser`]: Document driver locating the root element
//! - [`xml`]: XML utilities (tag names, verbatim text extraction)
//! - [`webapp`]: Deployment descriptor model and its schema table
//! - [`yaml`]: YAML and JSON output
//! - [`config`]: Constants and parse options
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod registry;
pub mod webapp;
pub mod xml;
pub mod yaml;

// Re-export commonly used items
pub use config::ParseOptions;
pub use error::{FieldError, Result, WebXmlError};
pub use parser::DocumentParser;
pub use registry::{ElementHandler, SchemaRegistry};
pub use webapp::{create_web_app_schema, WebAppConfiguration, WebAppSchema};
