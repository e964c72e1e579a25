//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::PageKind;

/// Folio site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, global = true, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether the command reads the shipped config instead of a file.
    pub const fn uses_builtin(&self) -> bool {
        matches!(
            self.command,
            Commands::Show { builtin: true, .. } | Commands::Head { builtin: true, .. }
        )
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the shipped configuration as a new config file
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create the config in (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the config file
    #[command(visible_alias = "c")]
    Check {
        /// Treat unknown config keys as errors
        #[arg(long)]
        deny_unknown: bool,
    },

    /// Print the resolved configuration
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Print the shipped configuration, ignoring any config file
        #[arg(long)]
        builtin: bool,

        /// Print only one top-level section
        #[arg(short, long, value_enum)]
        section: Option<Section>,
    },

    /// Print the `<head>` values of one page as JSON
    Head {
        /// Page to describe
        #[arg(value_enum)]
        page: PageKind,

        /// Use the shipped configuration, ignoring any config file
        #[arg(long)]
        builtin: bool,
    },
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
}

/// Top-level config sections.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Site,
    Pages,
    Links,
    Socials,
    Theme,
}

impl Section {
    /// Key of the section in the config file.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::Pages => "pages",
            Self::Links => "links",
            Self::Socials => "socials",
            Self::Theme => "theme",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::parse_from(["folio", "show", "--format", "toml", "--section", "theme"]);
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: OutputFormat::Toml,
                builtin: false,
                section: Some(Section::Theme),
            }
        ));
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
    }

    #[test]
    fn test_parse_check_with_config() {
        let cli = Cli::parse_from(["folio", "check", "--deny-unknown", "-C", "site/folio.toml"]);
        assert!(matches!(cli.command, Commands::Check { deny_unknown: true }));
        assert_eq!(cli.config, PathBuf::from("site/folio.toml"));
        assert!(!cli.uses_builtin());
    }

    #[test]
    fn test_parse_head() {
        let cli = Cli::parse_from(["folio", "head", "projects", "--builtin"]);
        assert!(matches!(
            cli.command,
            Commands::Head {
                page: PageKind::Projects,
                builtin: true
            }
        ));
        assert!(cli.uses_builtin());
    }
}
