//! JSON output types for machine-readable CLI output.
//!
//! These back the `--json` flag on `render` and `validate`.

use serde::{Deserialize, Serialize};
use swell_engine::AudioError;

/// Error codes for CLI-level failures.
///
/// Engine errors pass their own `SWELL_XXX` codes through unchanged.
pub mod error_codes {
    /// Params file could not be read or parsed
    pub const PARAMS_LOAD: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "SWELL_004")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&AudioError> for JsonError {
    fn from(err: &AudioError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

/// Summary of a successful render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderSummary {
    /// Seed the render used
    pub seed: u32,
    /// Path the WAV file was written to
    pub output: String,
    /// Sample encoding (pcm16 or float32)
    pub encoding: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of samples written
    pub num_samples: usize,
    /// Length in seconds
    pub duration_seconds: f64,
    /// Number of voices simulated
    pub voices: usize,
    /// BLAKE3 hash of the sample payload
    pub pcm_hash: String,
    /// Smallest raw sample before normalization
    pub raw_min: f64,
    /// Largest raw sample before normalization
    pub raw_max: f64,
}

/// JSON output for the `render` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    /// Whether the render succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Render summary (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RenderSummary>,
}

impl RenderOutput {
    /// Creates a successful render output.
    pub fn success(summary: RenderSummary) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(summary),
        }
    }

    /// Creates a failed render output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether the params are valid
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Total samples a render would produce (when valid)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t_max: Option<usize>,
    /// Voices a render would simulate (when valid)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voices: Option<usize>,
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_from_audio_error() {
        let err = AudioError::invalid_param("jitter", "must be finite");
        let json = JsonError::from(&err);
        assert_eq!(json.code, "SWELL_004");
        assert!(json.message.contains("jitter"));
        assert_eq!(json.file, None);
    }

    #[test]
    fn test_failure_omits_result() {
        let output = RenderOutput::failure(vec![
            JsonError::new(error_codes::PARAMS_LOAD, "boom").with_file("p.json")
        ]);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("result").is_none());
        assert_eq!(value["errors"][0]["file"], "p.json");
    }
}
