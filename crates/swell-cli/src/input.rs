//! Params file loading.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use swell_engine::DroneParams;

/// Loads render params from a JSON file, or the defaults when no path is given.
///
/// The params are parsed but not validated; callers decide how to report
/// validation failures.
pub fn load_params(path: Option<&str>) -> Result<DroneParams> {
    let Some(path) = path else {
        return Ok(DroneParams::default());
    };

    let json = fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read params file: {}", path))?;
    let params = DroneParams::from_json(&json)
        .with_context(|| format!("Failed to parse params file: {}", path))?;
    tracing::debug!(path, "loaded params");
    Ok(params)
}
