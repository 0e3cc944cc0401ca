use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use taiga_report::cli::Cli;
use taiga_report::{config, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let config = config::load_config(&cli.overrides())?;
    let report = taiga_report::run(&config)?;
    taiga_report::write_report(io::stdout().lock(), &report).context("cannot write report")?;
    Ok(())
}
