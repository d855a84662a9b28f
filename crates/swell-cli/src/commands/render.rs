//! Render command implementation
//!
//! Renders a drone and writes it as a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use std::time::Instant;
use swell_engine::{render, AudioError, DroneParams, RenderResult, SampleEncoding};

use super::json_output::{error_codes, print_json, JsonError, RenderOutput, RenderSummary};
use crate::input::load_params;

/// Run the render command
///
/// # Arguments
/// * `out_path` - Destination WAV file
/// * `params_path` - Optional params JSON file (defaults when absent)
/// * `seed` - Optional seed; a random one is drawn when absent
/// * `encoding` - Sample encoding of the written file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 params error, 2 write error
pub fn run(
    out_path: &str,
    params_path: Option<&str>,
    seed: Option<u32>,
    encoding: SampleEncoding,
    json_output: bool,
) -> Result<ExitCode> {
    let seed = seed.unwrap_or_else(rand::random);

    if json_output {
        run_json(out_path, params_path, seed, encoding)
    } else {
        run_human(out_path, params_path, seed, encoding)
    }
}

/// Renders and writes the file, keeping engine errors typed for reporting.
fn render_to_file(
    params: &DroneParams,
    out_path: &str,
    seed: u32,
    encoding: SampleEncoding,
) -> Result<RenderResult, AudioError> {
    let result = render(params, seed, encoding)?;
    result.wav.write_to(out_path)?;
    Ok(result)
}

fn exit_code_for(err: &AudioError) -> ExitCode {
    if err.is_config_error() {
        ExitCode::from(1)
    } else {
        ExitCode::from(2)
    }
}

/// Builds the JSON summary for a finished render.
pub fn summarize(result: &RenderResult, out_path: &str, seed: u32) -> RenderSummary {
    RenderSummary {
        seed,
        output: out_path.to_string(),
        encoding: result.wav.encoding.to_string(),
        sample_rate: result.wav.sample_rate,
        num_samples: result.wav.num_samples,
        duration_seconds: result.wav.duration_seconds(),
        voices: result.num_voices,
        pcm_hash: result.wav.pcm_hash.clone(),
        raw_min: result.raw_min,
        raw_max: result.raw_max,
    }
}

/// Run render with human-readable (colored) output
fn run_human(
    out_path: &str,
    params_path: Option<&str>,
    seed: u32,
    encoding: SampleEncoding,
) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Rendering to:".cyan().bold(), out_path);
    if let Some(path) = params_path {
        println!("{} {}", "Params:".cyan().bold(), path);
    }
    println!("{} {}", "Seed:".cyan().bold(), seed);
    println!("{} {}", "Encoding:".dimmed(), encoding);

    let params = load_params(params_path).context("Failed to load params")?;

    match render_to_file(&params, out_path, seed, encoding) {
        Ok(result) => {
            let duration_ms = start.elapsed().as_millis();
            println!(
                "  {} {} voices, {} samples @ {} Hz ({:.2}s)",
                "+".green(),
                result.num_voices,
                result.wav.num_samples,
                result.wav.sample_rate,
                result.wav.duration_seconds()
            );
            println!("  {} {}", "PCM hash:".dimmed(), result.wav.pcm_hash);
            println!(
                "\n{} Rendered in {}ms",
                "SUCCESS".green().bold(),
                duration_ms
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!(
                "  {} [{}]: {}",
                "x".red(),
                err.code().red(),
                err
            );
            println!("\n{} Render failed", "FAILED".red().bold());
            Ok(exit_code_for(&err))
        }
    }
}

/// Run render with machine-readable JSON output
fn run_json(
    out_path: &str,
    params_path: Option<&str>,
    seed: u32,
    encoding: SampleEncoding,
) -> Result<ExitCode> {
    let params = match load_params(params_path) {
        Ok(params) => params,
        Err(err) => {
            let mut error = JsonError::new(error_codes::PARAMS_LOAD, format!("{:#}", err));
            if let Some(path) = params_path {
                error = error.with_file(path);
            }
            print_json(&RenderOutput::failure(vec![error]))?;
            return Ok(ExitCode::from(1));
        }
    };

    match render_to_file(&params, out_path, seed, encoding) {
        Ok(result) => {
            print_json(&RenderOutput::success(summarize(&result, out_path, seed)))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            print_json(&RenderOutput::failure(vec![JsonError::from(&err)]))?;
            Ok(exit_code_for(&err))
        }
    }
}
