use anyhow::Result;
use colored::Colorize;

use crate::update::{self, CratesIo, UpdateStatus, CRATE_NAME};

/// Run the update command - compare the installed version with the registry.
///
/// Registry failures are reported but leave the exit status untouched.
pub async fn run() -> Result<()> {
    println!("{} Checking for updates...", "ℹ".blue());

    match update::check(&CratesIo::new()).await {
        Ok(UpdateStatus::UpToDate { version }) => {
            println!(
                "{} Already using the latest version ({})",
                "✓".green(),
                version
            );
        }
        Ok(UpdateStatus::Mismatch { installed, latest }) => {
            println!("{} Current version: {}", "ℹ".blue(), installed.yellow());
            println!("{} Latest version: {}", "ℹ".blue(), latest.green());
            println!(
                "{} Run {} to update",
                "ℹ".blue(),
                format!("cargo install {CRATE_NAME}").cyan()
            );
        }
        Err(err) => {
            eprintln!("{} Failed to check for updates: {err}", "✗".red());
        }
    }

    Ok(())
}
