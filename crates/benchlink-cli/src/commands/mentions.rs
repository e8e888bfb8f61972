//! Mentions command implementation.

use crate::cli::MentionsArgs;
use crate::commands::read_input;
use crate::config::Config;
use crate::error::Result;
use benchlink_domain::RawDocument;
use benchlink_extractor::Extractor;
use std::fs;
use std::path::Path;
use tracing::info;

/// Execute the mentions command.
///
/// Only the dataset name finder runs; no URLs are classified.
pub fn execute_mentions(args: MentionsArgs, config: &Config, output: Option<&Path>) -> Result<()> {
    let text = read_input(&args.path)?;
    let doc = RawDocument::from_text(args.path.display().to_string(), &text);
    let mentions = Extractor::new(config.extractor.clone())?.find_mentions(&doc);

    let json = serde_json::to_string_pretty(&mentions)?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            info!("Saved {} mentions to {}", mentions.len(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
