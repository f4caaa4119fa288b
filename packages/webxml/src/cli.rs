//! Command-line interface for loading deployment descriptors.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{validate_max_depth, ParseOptions, DEFAULT_MAX_DEPTH};
use crate::error::Result;
use crate::webapp::{create_web_app_schema, WebAppConfiguration};
use crate::yaml::{render, save_output, OutputFormat};

/// webxml - Bind servlet deployment descriptors to typed configuration.
#[derive(Parser)]
#[command(name = "webxml")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a descriptor and print the bound configuration.
    Parse {
        /// Path to the web.xml file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,

        /// Maximum element nesting depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a descriptor and print a summary of its contents.
    Check {
        /// Path to the web.xml file
        file: PathBuf,

        /// Maximum element nesting depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            format,
            max_depth,
            output,
        } => parse_command(&file, format, max_depth, output.as_deref()),
        Commands::Check { file, max_depth } => check_command(&file, max_depth),
    }
}

/// Load a descriptor with the web-app schema.
fn load(file: &Path, max_depth: usize) -> Result<WebAppConfiguration> {
    validate_max_depth(max_depth)?;
    let options = ParseOptions::new().with_max_depth(max_depth);

    let schema = create_web_app_schema()?;
    schema.parse_file(file, &options)
}

/// Execute the parse command.
fn parse_command(
    file: &Path,
    format: OutputFormat,
    max_depth: usize,
    output: Option<&Path>,
) -> Result<()> {
    let config = load(file, max_depth)?;

    match output {
        Some(path) => {
            save_output(&config, format, path)?;
            println!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{}", render(&config, format)?),
    }

    Ok(())
}

/// Execute the check command.
fn check_command(file: &Path, max_depth: usize) -> Result<()> {
    let config = load(file, max_depth)?;

    println!("{} {}", style("Valid").green().bold(), file.display());
    if let Some(name) = &config.display_name {
        println!("  Display name: {}", style(name.trim()).cyan());
    }
    println!("  Context params: {}", config.context_params.len());
    println!("  Listeners: {}", config.listeners.len());
    println!("  Servlets: {}", config.servlets.len());
    println!("  Servlet mappings: {}", config.servlet_mappings.len());
    println!("  Filters: {}", config.filters.len());
    println!("  Filter mappings: {}", config.filter_mappings.len());
    println!("  Welcome files: {}", config.welcome_files().len());
    println!("  Error pages: {}", config.error_pages.len());
    println!("  Mime mappings: {}", config.mime_mappings.len());
    println!("  Taglibs: {}", config.taglibs.len());
    if let Some(timeout) = config
        .session_config
        .as_ref()
        .and_then(|s| s.session_timeout)
    {
        println!("  Session timeout: {timeout} min");
    }

    Ok(())
}
