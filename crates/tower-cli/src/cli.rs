//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Tower - Manage GitHub repository settings from one configuration file
#[derive(Parser, Debug)]
#[command(name = "tower")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration document (YAML, JSON or TOML)
    #[arg(
        short,
        long,
        global = true,
        env = "TOWER_CONFIG",
        default_value = "repos.yaml"
    )]
    pub config: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved configuration of each repository
    ///
    /// Examples:
    ///   tower resolve                  # All repositories, as YAML
    ///   tower resolve --name acme/api  # One repository
    ///   tower resolve --json           # JSON for scripting
    Resolve {
        /// Only show this repository
        #[arg(short, long)]
        name: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Validate and lint the configuration
    ///
    /// Exits non-zero when any repository fails to resolve.
    Check {
        /// Output as JSON for CI/CD integration
        #[arg(long)]
        json: bool,
    },

    /// Show the provisioning steps without applying them
    Plan {
        /// Owner for repositories named without an 'owner/' prefix
        #[arg(short, long, env = "TOWER_OWNER")]
        owner: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Write the repository URL exports to a file
    ///
    /// The output format follows the file extension (.yaml, .json, .toml).
    Export {
        /// Output file
        output: PathBuf,

        /// Owner for repositories named without an 'owner/' prefix
        #[arg(short, long, env = "TOWER_OWNER")]
        owner: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   tower completions bash > ~/.local/share/bash-completion/completions/tower
    ///   tower completions zsh > ~/.zfunc/_tower
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_command() {
        let cli = Cli::parse_from(["tower"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_global_config_flag() {
        let cli = Cli::parse_from(["tower", "check", "--config", "other.json"]);
        assert_eq!(cli.config, PathBuf::from("other.json"));
        assert!(matches!(cli.command, Some(Commands::Check { json: false })));
    }

    #[test]
    fn parse_resolve_with_name() {
        let cli = Cli::parse_from(["tower", "resolve", "--name", "acme/api", "--json"]);
        match cli.command {
            Some(Commands::Resolve { name, json }) => {
                assert_eq!(name.as_deref(), Some("acme/api"));
                assert!(json);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn parse_plan_with_owner() {
        let cli = Cli::parse_from(["tower", "-v", "plan", "--owner", "acme"]);
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Plan { owner, json }) => {
                assert_eq!(owner.as_deref(), Some("acme"));
                assert!(!json);
            }
            _ => panic!("Expected Plan command"),
        }
    }

    #[test]
    fn parse_export_command() {
        let cli = Cli::parse_from(["tower", "export", "urls.json"]);
        match cli.command {
            Some(Commands::Export { output, .. }) => {
                assert_eq!(output, PathBuf::from("urls.json"));
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["tower", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }
}
