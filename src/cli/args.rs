//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run event consistency rules and report issues
//! - `list`: Print the merged event registry
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::List(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory the scan roots are relative to
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directory to scan (overrides config file, repeatable)
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<String>,

    /// Additional path substring or glob to exclude (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<CheckRule>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Print the full registry as JSON
    #[arg(long)]
    pub json: bool,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check events for missing declarations, definitions, creations and arity mismatches
    Check(CheckCommand),
    /// List every event as `identifier: declaration,definition,global_name`
    List(ListCommand),
    /// Initialize a new .eventlintrc.json configuration file
    Init,
}
