//! Template command implementation
//!
//! Emits the default params as JSON, ready to be edited and passed back with
//! `--params`.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use swell_engine::DroneParams;

/// Returns the default params document.
pub fn template_json() -> Result<String> {
    Ok(DroneParams::default().to_json_pretty()?)
}

/// Run the template command
///
/// # Arguments
/// * `out_path` - Optional file to write; stdout when absent
pub fn run(out_path: Option<&str>) -> Result<ExitCode> {
    let json = template_json()?;

    match out_path {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write template: {}", path))?;
            println!("{} {}", "Template written to:".cyan().bold(), path);
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}
