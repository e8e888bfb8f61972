//! Conference command implementation.

use crate::cli::ConferenceArgs;
use crate::commands::{build_harvester, write_results};
use crate::config::Config;
use crate::error::{CliError, Result};
use benchlink_harvester::openreview::tab_fragment;
use std::path::Path;

/// Execute the conference command.
pub fn execute_conference(args: ConferenceArgs, config: &Config, output: Option<&Path>) -> Result<()> {
    if tab_fragment(&args.index_url).is_none() {
        return Err(CliError::InvalidInput(format!(
            "Index URL must end in #tab-<name>: {}",
            args.index_url
        )));
    }

    let mut harvester = build_harvester(config)?;
    let outcome = harvester.run_conference(&args.index_url);
    write_results(&outcome, output)
}
