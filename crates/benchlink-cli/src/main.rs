//! Benchlink CLI - Find dataset and benchmark links in research papers.

use anyhow::Context;
use benchlink_cli::commands;
use benchlink_cli::{Cli, Command, Config};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply_overrides(&cli);
    config.validate()?;

    let output = cli.output.as_deref();
    match cli.command {
        Command::Conference(args) => commands::execute_conference(args, &config, output)?,
        Command::Pdf(args) => commands::execute_pdf(args, &config, output)?,
        Command::Text(args) => commands::execute_text(args, &config, output)?,
        Command::Mentions(args) => commands::execute_mentions(args, &config, output)?,
    }

    Ok(())
}
