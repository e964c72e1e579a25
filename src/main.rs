//! Folio - load, check and print the site configuration.

use anyhow::Result;
use clap::Parser;
use folio::cli::{self, Cli, Commands};
use folio::config::{FolioConfig, init_config};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    folio::logger::set_color(cli.color);
    folio::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dir, force, dry } => {
            cli::init::new_config(dir.as_deref(), &cli.config, *force, *dry)
        }
        Commands::Check { .. } => {
            let config = load_config(&cli)?;
            cli::check::report(&config)
        }
        Commands::Show {
            format, section, ..
        } => {
            let config = load_config(&cli)?;
            println!("{}", cli::show::render(&config, *format, *section)?);
            Ok(())
        }
        Commands::Head { page, .. } => {
            let config = load_config(&cli)?;
            println!("{}", cli::show::render_head(&config, *page)?);
            Ok(())
        }
    }
}

/// Load the config file (or the shipped config) and install it globally.
fn load_config(cli: &Cli) -> Result<Arc<FolioConfig>> {
    let config = if cli.uses_builtin() {
        FolioConfig::builtin()
    } else {
        FolioConfig::load(cli)?
    };
    Ok(init_config(config))
}
