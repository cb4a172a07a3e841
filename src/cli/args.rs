//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// GEDCOM line-tree parser: folds level-tagged lines into record hierarchies
#[derive(Parser, Debug)]
#[command(name = "gedtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show file structure as a tree
    Tree {
        /// GEDCOM file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Fold CONC/CONT continuations into their parent value
        #[arg(long)]
        fold: bool,
    },

    /// Validate hierarchy structure
    Check {
        /// GEDCOM file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List top-level records (xref id and tag)
    Records {
        /// GEDCOM file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Re-emit normalized level-prefixed lines
    Flatten {
        /// GEDCOM file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Check all GEDCOM files under a directory
    Scan {
        /// Directory to scan
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,
    },

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
    /// Show merged config
    Show,

    /// Print a config template
    Init,

    /// Show config paths
    Path,
}
