//! PDF command implementation.

use crate::cli::PdfArgs;
use crate::commands::{build_harvester, write_results};
use crate::config::Config;
use crate::error::Result;
use std::path::Path;

/// Execute the pdf command.
pub fn execute_pdf(args: PdfArgs, config: &Config, output: Option<&Path>) -> Result<()> {
    let mut harvester = build_harvester(config)?;
    let outcome = harvester.process_local_pdf(&args.path)?;
    write_results(&outcome, output)
}
