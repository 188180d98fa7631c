//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Composite trees: leaves and branches behind one node interface, folded into a single result
#[derive(Parser, Debug)]
#[command(name = "comptree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Additional config file, applied over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath, env = "COMPTREE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree and print the result of its operation
    Run {
        /// Tree expression, e.g. "[[L L] [L]]"
        expr: String,
    },

    /// Print the tree as a hierarchy
    Tree {
        /// Tree expression, e.g. "[[L L] [L]]"
        expr: String,
    },

    /// Show depth and node counts
    Info {
        /// Tree expression, e.g. "[[L L] [L]]"
        expr: String,
    },

    /// Walk through building and growing a sample tree
    Demo,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show the global config file location
    Path,
}
