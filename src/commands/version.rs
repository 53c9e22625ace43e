use anyhow::Result;

/// Run the version command - print the installed version.
pub fn run() -> Result<()> {
    println!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    Ok(())
}
