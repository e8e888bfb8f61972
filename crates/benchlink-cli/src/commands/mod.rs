//! Command implementations.

pub mod conference;
pub mod mentions;
pub mod pdf;
pub mod text;

pub use self::conference::execute_conference;
pub use self::mentions::execute_mentions;
pub use self::pdf::execute_pdf;
pub use self::text::execute_text;

use crate::config::Config;
use crate::error::{CliError, Result};
use benchlink_extractor::Extractor;
use benchlink_gatekeeper::Classifier;
use benchlink_harvester::{
    save_json, to_json, HarvestOutcome, Harvester, HttpDownloader, OpenReviewSource, Pipeline,
    PopplerConverter,
};
use std::fs;
use std::path::Path;
use tracing::info;

/// Harvester wired to the real collaborators.
pub type DefaultHarvester = Harvester<OpenReviewSource, HttpDownloader, PopplerConverter>;

/// Build the extraction and classification pipeline from configuration.
pub fn build_pipeline(config: &Config) -> Result<Pipeline> {
    let extractor = Extractor::new(config.extractor.clone())?;
    let classifier = match config.judge.build_invoker()? {
        Some(invoker) => {
            info!("Judge fallback enabled with model {}", invoker.model_name());
            Classifier::with_invoker(invoker)
        }
        None => Classifier::rules_only(),
    };
    Ok(Pipeline::new(extractor, classifier))
}

/// Build a harvester backed by OpenReview and the poppler tools.
pub fn build_harvester(config: &Config) -> Result<DefaultHarvester> {
    let pipeline = build_pipeline(config)?;
    Ok(Harvester::from_config(config.harvest.clone(), pipeline)?)
}

/// Report a finished run and write its records.
///
/// Reports go to stderr; records go to `output` or, without one, to stdout.
pub fn write_results(outcome: &HarvestOutcome, output: Option<&Path>) -> Result<()> {
    for report in &outcome.reports {
        eprintln!("{}", report.summary());
    }
    eprintln!("{}", outcome.summary());

    match output {
        Some(path) => save_json(path, &outcome.records)?,
        None => println!("{}", to_json(&outcome.records)?),
    }
    Ok(())
}

/// Read a text input file; a missing file is an input error.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(CliError::InvalidInput(format!(
            "Input file not found: {}",
            path.display()
        )));
    }
    Ok(fs::read_to_string(path)?)
}
