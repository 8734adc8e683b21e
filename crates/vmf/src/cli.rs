//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `vmf list` | Registered state holders and whether config disables them |
//! | `vmf resolve <NAME>` | Build the container and create one instance |

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use vmf_application::registry::list_state_holders;
use vmf_domain::error::{Error, Result};
use vmf_infrastructure::ErrorContext;
use vmf_infrastructure::config::{AppConfig, ConfigLoader};
use vmf_infrastructure::di::HolderContainer;

/// Command line interface for vmf
#[derive(Parser, Debug)]
#[command(name = "vmf")]
#[command(about = "Inspect and exercise the state holder registry")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List state holders registered at compile time
    List,
    /// Create one instance of the named state holder
    Resolve {
        /// Registry name of the holder
        name: String,
    },
}

/// Load configuration from `path`, or from the default locations
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => ConfigLoader::new().with_config_path(path).load(),
        None => ConfigLoader::new().load(),
    }
}

/// Execute `command` against `config`, writing the report to `out`
pub fn run<W: Write>(command: &Command, config: AppConfig, out: &mut W) -> Result<()> {
    match command {
        Command::List => {
            writeln!(out, "Registered state holders:").io_context("write report")?;
            for (name, description) in list_state_holders() {
                let marker = if config.registry.is_disabled(name) {
                    " (disabled)"
                } else {
                    ""
                };
                writeln!(out, "  - {name}: {description}{marker}").io_context("write report")?;
            }
        }
        Command::Resolve { name } => {
            let container = HolderContainer::build(config, &[])?;
            let descriptor = container
                .registry()
                .descriptor_named(name)
                .ok_or_else(|| Error::unknown_holder(name))?;
            let holder = container.factory().create(&descriptor)?;
            writeln!(out, "Resolved '{name}' -> {}", holder.descriptor()).io_context("write report")?;
        }
    }
    Ok(())
}
