use std::ffi::OsString;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

const EXAMPLES: &str = "\
Examples:
  claude-spec-chain install          # Install to current directory
  claude-spec-chain install --force  # Force overwrite existing
  claude-spec-chain update           # Check for updates
  claude-spec-chain version          # Show version";

#[derive(Parser)]
#[command(name = "claude-spec-chain")]
#[command(version)]
#[command(about = "Install and manage spec-chain commands for Claude Code")]
#[command(long_about = "Claude Spec Chain installs the spec-chain slash commands into a \
project's .claude/commands directory so they are available inside Claude Code. Existing \
user files (CLAUDE.md, prime.md) are left untouched.")]
#[command(disable_help_subcommand = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install spec-chain commands to the current directory
    Install {
        /// Overwrite an existing installation
        #[arg(short, long)]
        force: bool,
    },

    /// Check for updates
    Update,

    /// Show the installed version
    Version,

    /// Show this help message
    Help,

    // Anything else is captured here and reported as an unknown command.
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// Print the full usage text to stdout.
pub fn print_help() -> Result<()> {
    Cli::command().print_long_help()?;
    Ok(())
}
