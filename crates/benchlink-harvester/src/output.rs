//! JSON persistence of aggregated records

use crate::HarvestError;
use benchlink_domain::AggregatedRecord;
use std::fs;
use std::path::Path;
use tracing::info;

/// Records as pretty-printed JSON with stable key order
pub fn to_json(records: &[AggregatedRecord]) -> Result<String, HarvestError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write `records` to `path` as UTF-8 JSON
///
/// Parent directories are created as needed. An empty list is written as
/// `[]`.
pub fn save_json(path: &Path, records: &[AggregatedRecord]) -> Result<(), HarvestError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_json(records)?)?;
    info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}
