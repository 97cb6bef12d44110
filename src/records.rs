use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One building's coordinate entry, as stored in the input and output files.
///
/// `confidence` comes from an upstream detection step and is carried through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub building_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub confidence: f64,
    /// Resolved street address. Left out of the output entirely for
    /// buildings that failed to resolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Read a JSON array of building records from a file.
pub fn load(path: &Path) -> Result<Vec<Building>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to parse {} as a building list", path.display()))
}

/// Write the building records to a file as a pretty-printed JSON array,
/// creating or truncating the destination.
pub fn save(path: &Path, buildings: &[Building]) -> Result<()> {
    let data = serde_json::to_string_pretty(buildings)
        .context("failed to serialize building list")?;
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}
