//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::CONFIG_ENV_VAR;

/// Folio - a single-page portfolio for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute; without one the page opens
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the project list in display order
    Projects {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print every outbound link on the page
    Links,
    /// Show the config file location and effective settings
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_page() {
        let args = Args::try_parse_from(["folio"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_projects_json_flag() {
        let args = Args::try_parse_from(["folio", "projects", "--json"]).unwrap();
        assert_eq!(args.command, Some(Commands::Projects { json: true }));
    }

    #[test]
    fn test_config_flag_after_subcommand() {
        let args = Args::try_parse_from(["folio", "links", "--config", "/tmp/x.toml"]).unwrap();
        assert_eq!(args.command, Some(Commands::Links));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/x.toml")));
    }
}
