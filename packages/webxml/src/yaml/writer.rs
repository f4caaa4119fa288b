//! YAML and JSON writers for bound configurations.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::webapp::WebAppConfiguration;

/// Serialization format for a bound configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// YAML document with a `---` start marker.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Conventional file extension for the format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// Generate a YAML document from a configuration.
///
/// Absent optional fields and empty collections are omitted.
pub fn generate_yaml(config: &WebAppConfiguration) -> Result<String> {
    let yaml_string = serde_yaml_ng::to_string(config)?;
    Ok(format!("---\n{yaml_string}"))
}

/// Generate pretty-printed JSON from a configuration.
pub fn generate_json(config: &WebAppConfiguration) -> Result<String> {
    let mut json = serde_json::to_string_pretty(config)?;
    json.push('\n');
    Ok(json)
}

/// Render a configuration in the requested format.
pub fn render(config: &WebAppConfiguration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => generate_yaml(config),
        OutputFormat::Json => generate_json(config),
    }
}

/// Save a configuration to a file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// This ensures partial writes don't corrupt existing files on crash.
pub fn save_output(config: &WebAppConfiguration, format: OutputFormat, path: &Path) -> Result<()> {
    let content = render(config, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("output.{}", format.extension()));
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), "Saved configuration");

    Ok(())
}
