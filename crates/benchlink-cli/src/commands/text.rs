//! Text command implementation.

use crate::cli::TextArgs;
use crate::commands::{build_harvester, read_input, write_results};
use crate::config::Config;
use crate::error::Result;
use std::path::Path;

/// Execute the text command.
pub fn execute_text(args: TextArgs, config: &Config, output: Option<&Path>) -> Result<()> {
    let text = read_input(&args.path)?;
    let html = args.html.as_deref().map(read_input).transpose()?;
    let id = args
        .id
        .unwrap_or_else(|| args.path.display().to_string());

    let mut harvester = build_harvester(config)?;
    let outcome = harvester.process_text(&id, &text, html.as_deref());
    write_results(&outcome, output)
}
