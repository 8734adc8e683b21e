//! vmf - Entry Point
//!
//! Loads configuration, installs logging, then runs the requested command.

use clap::Parser;
use vmf::cli::{Cli, load_config, run};
use vmf_infrastructure::logging::init_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;
    run(&cli.command, config, &mut std::io::stdout().lock())?;
    Ok(())
}
