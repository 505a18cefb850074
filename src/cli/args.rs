//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! xi18nt commands using clap's derive API.
//!
//! ## Commands
//!
//! - `transform`: Rewrite CJK string literals into bundle lookups
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
            Some(Command::Transform(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Resource bundle base name (overrides config file)
    #[arg(long)]
    pub bundle_name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct TransformArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite sources and write the bundle (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct TransformCommand {
    #[command(flatten)]
    pub args: TransformArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite CJK string literals into resource-bundle lookups and emit .properties files
    Transform(TransformCommand),
    /// Initialize a new .xi18ntrc.json configuration file
    Init,
}
