//! Validate command implementation
//!
//! Loads and validates a params file without rendering.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use swell_engine::{DroneParams, Schedule};

use super::json_output::{error_codes, print_json, JsonError, ValidateOutput};
use crate::input::load_params;

/// Run the validate command
///
/// # Arguments
/// * `params_path` - Params JSON file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(params_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(params_path)
    } else {
        run_human(params_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(params_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), params_path);

    let params = load_params(Some(params_path))
        .with_context(|| format!("Failed to load params file: {}", params_path))?;

    match Schedule::from_params(&params) {
        Ok(schedule) => {
            print_params_summary(&params, &schedule);
            println!("\n{} Params are valid", "SUCCESS".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("  {} [{}]: {}", "x".red(), err.code().red(), err);
            println!("\n{} Params validation failed", "FAILED".red().bold());
            Ok(ExitCode::from(1))
        }
    }
}

fn print_params_summary(params: &DroneParams, schedule: &Schedule) {
    println!(
        "  {} {} voices across {} scale degrees",
        "+".green(),
        params.voice_count(),
        params.scale_degrees.len()
    );
    println!(
        "  {} {} samples @ {} Hz ({:.2}s)",
        "+".green(),
        schedule.t_max(),
        params.sample_rate,
        params.durations.total()
    );
    for (name, seconds) in params.durations.named() {
        println!("    {} {:.2}s", format!("{}:", name).dimmed(), seconds);
    }
}

/// Run validate with machine-readable JSON output
fn run_json(params_path: &str) -> Result<ExitCode> {
    let params = match load_params(Some(params_path)) {
        Ok(params) => params,
        Err(err) => {
            let output = ValidateOutput {
                success: false,
                errors: vec![JsonError::new(error_codes::PARAMS_LOAD, format!("{:#}", err))
                    .with_file(params_path)],
                t_max: None,
                voices: None,
            };
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let (output, code) = match Schedule::from_params(&params) {
        Ok(schedule) => (
            ValidateOutput {
                success: true,
                errors: Vec::new(),
                t_max: Some(schedule.t_max()),
                voices: Some(params.voice_count()),
            },
            ExitCode::SUCCESS,
        ),
        Err(err) => (
            ValidateOutput {
                success: false,
                errors: vec![JsonError::from(&err).with_file(params_path)],
                t_max: None,
                voices: None,
            },
            ExitCode::from(1),
        ),
    };

    print_json(&output)?;
    Ok(code)
}
