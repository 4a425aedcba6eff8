//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose) are inherited by all subcommands
//! - `show` arguments are also accepted without the subcommand name

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::CharsetMode;

/// foldertree - draw directory trees, optionally pruned to selected folders
#[derive(Parser, Debug)]
#[command(name = "foldertree")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub show: ShowArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Subcommand to run; bare invocations are `show`
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Show(self.show))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the directory tree (default)
    Show(ShowArgs),

    /// Write a commented .foldertree.toml template
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowArgs {
    /// Folder to draw
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Prune the tree to these folders (repeatable)
    #[arg(short, long = "select", value_name = "PATH")]
    pub select: Vec<PathBuf>,

    /// Exclude entries matching PATTERN (repeatable; first `*` is a wildcard)
    #[arg(short, long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Ignore configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Connector style
    #[arg(long, value_enum)]
    pub charset: Option<CharsetMode>,

    /// Write the tree to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
