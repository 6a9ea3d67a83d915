mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::debug;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    debug!("Starting verbanner");
    cli.execute()?;

    Ok(())
}
