//! YAML and JSON output generation for bound configurations.

mod writer;

pub use writer::{generate_json, generate_yaml, render, save_output, OutputFormat};
