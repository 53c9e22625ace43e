mod cli;
mod commands;
mod copy;
mod install;
mod paths;
mod update;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "✗".red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Some(Commands::Install { force }) => commands::install::run(force),
        Some(Commands::Update) => {
            commands::update::run().await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Version) => {
            commands::version::run()?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Help) | None => {
            cli::print_help()?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::External(args)) => {
            let name = args
                .first()
                .map(|arg| arg.to_string_lossy().into_owned())
                .unwrap_or_default();
            eprintln!("{} Unknown command: {name}", "✗".red());
            println!();
            cli::print_help()?;
            Ok(ExitCode::FAILURE)
        }
    }
}
