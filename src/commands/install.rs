use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::install::{self, InstallError};
use crate::paths;

/// Run the install command - copy the bundled commands into the current directory.
pub fn run(force: bool) -> Result<ExitCode> {
    println!(
        "{} Installing spec-chain commands to current directory...",
        "ℹ".blue()
    );

    let target_dir = env::current_dir().context("failed to resolve current directory")?;
    let package_root = paths::package_root();

    match install::install(&package_root, &target_dir, force) {
        Ok(report) => {
            if report.replaced {
                println!("{} Removed existing installation", "✓".green());
            }
            println!(
                "{} Spec-chain commands installed successfully!",
                "✓".green()
            );

            if !report.commands.is_empty() {
                println!();
                println!("Available commands in Claude Code:");
                for name in &report.commands {
                    println!("  /{name}");
                }
            }

            Ok(ExitCode::SUCCESS)
        }
        Err(InstallError::AlreadyInstalled(_)) => {
            println!(
                "{} Spec-chain commands already exist in this directory",
                "⚠".yellow()
            );
            println!(
                "{} Use --force to overwrite the existing installation",
                "ℹ".blue()
            );
            Ok(ExitCode::FAILURE)
        }
        Err(InstallError::SourceNotFound(searched)) => {
            eprintln!(
                "{} Could not find .claude directory in package installation",
                "✗".red()
            );
            eprintln!("{} Looked in: {}", "✗".red(), searched.display());
            Ok(ExitCode::FAILURE)
        }
        Err(InstallError::Copy(err)) => Err(err.context("Installation failed")),
    }
}
