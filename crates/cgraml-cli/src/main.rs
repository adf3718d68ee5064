//! cgraml CLI - Typed REST client class generator
//!
//! Commands:
//! - `cgraml generate` - Generate model and parameters classes from an API document
//! - `cgraml check` - Validate an API document and project configuration

use anyhow::Context;
use clap::{Parser, Subcommand};
use cgraml_logging::LogLevel;

mod codegen;
mod generate;
mod loader;
mod project;

use codegen::OutputFormat;
use project::{Overrides, ProjectConfig};

#[derive(Parser)]
#[command(name = "cgraml")]
#[command(author, version, about = "Generate typed REST client classes", long_about = None)]
struct Cli {
    /// Console log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model and parameters classes
    Generate {
        /// Path to the API document (JSON)
        #[arg(short, long)]
        source: Option<String>,

        /// Output directory for generated code (default: generated)
        #[arg(short, long)]
        output: Option<String>,

        /// Base package, e.g. com.example.api
        #[arg(short, long)]
        package: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Path to cgraml.toml (default: ./cgraml.toml when present)
        #[arg(short, long)]
        config: Option<String>,

        /// Exit with an error when any class fails to generate
        #[arg(long)]
        strict: bool,

        /// Build every class without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate an API document
    Check {
        /// Path to the API document (JSON)
        #[arg(short, long)]
        source: Option<String>,

        /// Base package used to resolve model types
        #[arg(short, long)]
        package: Option<String>,

        /// Path to cgraml.toml (default: ./cgraml.toml when present)
        #[arg(short, long)]
        config: Option<String>,
    },
}

impl Commands {
    fn config_path(&self) -> Option<&str> {
        match self {
            Commands::Generate { config, .. } | Commands::Check { config, .. } => config.as_deref(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ProjectConfig::load(cli.command.config_path())?;
    config.validate().context("Invalid project configuration")?;

    let level = cli.log_level.or(config.log_level()?).unwrap_or_default();
    cgraml_logging::init_logging(level);

    match cli.command {
        Commands::Generate {
            source,
            output,
            package,
            format,
            strict,
            dry_run,
            ..
        } => {
            let project = config.resolve(Overrides {
                source,
                output,
                base_package: package,
                format,
            })?;
            generate::run(&project, config.generator, strict, dry_run)?;
        }
        Commands::Check {
            source, package, ..
        } => {
            let project = config.resolve(Overrides {
                source,
                base_package: package,
                ..Overrides::default()
            })?;
            loader::check(&project.source, &config.generator, &project.base_package)?;
        }
    }

    Ok(())
}
