//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `merge`: Print or write the fallback-merged translation table
//! - `lookup`: Resolve a single key for the active (or given) locale
//! - `coverage`: Show how many keys each locale translates vs. falls back
//! - `init`: Initialize trmerge configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::locale::Locale;

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
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Coverage(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root to search for the config file (defaults to the current directory)
    #[arg(long, env = "TRMERGE_ROOT")]
    pub root: Option<PathBuf>,

    /// English reference bundle (overrides config file)
    #[arg(long)]
    pub reference: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// Write the merged table to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only include this namespace
    #[arg(long)]
    pub namespace: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Translation namespace, e.g. plugin.extensions
    pub namespace: String,

    /// Message key, e.g. common.readMore
    pub key: String,

    /// Locale to resolve (defaults to the configured locale environment variable)
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CoverageCommand {
    /// Locales to report (default: all)
    /// Can be specified multiple times: --locale fr --locale ja
    #[arg(long = "locale", value_enum)]
    pub locales: Vec<Locale>,

    /// Exit with failure when any key falls back to English
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge locale bundles with English fallback and print the result as JSON
    Merge(MergeCommand),
    /// Resolve a translation key for the active locale
    Lookup(LookupCommand),
    /// Report translated and fallback key counts per namespace and locale
    Coverage(CoverageCommand),
    /// Initialize a new .trmergerc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
