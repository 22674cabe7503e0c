//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all lingot
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (missing, untranslated, obsolete, duplicate)
//! - `update`: Re-extract strings and merge them into the catalogs
//! - `stats`: Show per-catalog translation statistics
//! - `init`: Initialize a lingot configuration file

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
            Some(Command::Update(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Catalog file or glob (overrides config file; can be repeated)
    #[arg(long = "catalog")]
    pub catalogs: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UpdateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write catalog files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Drop messages that vanished from the sources instead of marking
    /// them obsolete
    #[arg(long)]
    pub no_obsolete: bool,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs against the sources (missing, untranslated, obsolete, duplicate)
    Check(CheckCommand),
    /// Extract translatable strings and merge them into the catalogs
    Update(UpdateCommand),
    /// Show per-catalog translation statistics
    Stats(StatsCommand),
    /// Initialize a new .lingotrc.json configuration file
    Init,
}
