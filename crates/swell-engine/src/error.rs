//! Error types for the drone engine.

use thiserror::Error;

/// Result type for engine operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while configuring or rendering a drone.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid phase duration.
    #[error("invalid {phase} duration: {duration} seconds")]
    InvalidDuration {
        /// Name of the phase the duration belongs to.
        phase: &'static str,
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Params document could not be parsed.
    #[error("invalid params document: {0}")]
    Params(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "SWELL_001",
            AudioError::InvalidDuration { .. } => "SWELL_002",
            AudioError::InvalidFrequency { .. } => "SWELL_003",
            AudioError::InvalidParameter { .. } => "SWELL_004",
            AudioError::Params(_) => "SWELL_005",
            AudioError::Io(_) => "SWELL_006",
        }
    }

    /// Returns true if the error comes from configuration rather than output.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, AudioError::Io(_))
    }
}
