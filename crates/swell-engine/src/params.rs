//! Render parameters.
//!
//! Every tunable of a render lives in [`DroneParams`]. The defaults describe
//! the classic 18 second swell: three seconds of wandering, three seconds of
//! converging onto an eleven-degree chord, seven seconds held and a five
//! second fade. Params round-trip through JSON so they can be stored next to
//! rendered files.

use serde::{Deserialize, Serialize};

use crate::error::{AudioError, AudioResult};

/// Longest render accepted, in seconds.
pub const MAX_TOTAL_SECONDS: f64 = 600.0;

/// Highest sample rate accepted, in Hz.
pub const MAX_SAMPLE_RATE: u32 = 384_000;

/// Base scale degrees of the target chord, in piano-key units.
pub const DEFAULT_SCALE_DEGREES: [f64; 11] = [
    5.0, 17.0, 25.0, 30.0, 37.0, 42.0, 49.0, 54.0, 61.0, 66.0, 70.0,
];

/// Durations of the four phases, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhaseDurations {
    /// Random walk inside the wander band.
    pub wander: f64,
    /// Linear glide onto the targets.
    pub stabilize: f64,
    /// Chord held at full amplitude.
    pub hold: f64,
    /// Linear fade to silence.
    pub decrescendo: f64,
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            wander: 3.0,
            stabilize: 3.0,
            hold: 7.0,
            decrescendo: 5.0,
        }
    }
}

impl PhaseDurations {
    /// Creates phase durations.
    pub fn new(wander: f64, stabilize: f64, hold: f64, decrescendo: f64) -> Self {
        Self {
            wander,
            stabilize,
            hold,
            decrescendo,
        }
    }

    /// Total length in seconds.
    pub fn total(&self) -> f64 {
        self.wander + self.stabilize + self.hold + self.decrescendo
    }

    /// Durations paired with their phase names, in timeline order.
    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("wander", self.wander),
            ("stabilize", self.stabilize),
            ("hold", self.hold),
            ("decrescendo", self.decrescendo),
        ]
    }
}

/// Complete parameter set for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DroneParams {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Lowest frequency a voice may reach while wandering, in Hz.
    pub wander_min: f64,
    /// Highest frequency a voice may reach while wandering, in Hz.
    pub wander_max: f64,
    /// Value the quietest sample is mapped to.
    pub output_min: f64,
    /// Value the loudest sample is mapped to.
    pub output_max: f64,
    /// Size of one wander step, in piano keys.
    pub step_size: f64,
    /// Phase durations.
    pub durations: PhaseDurations,
    /// Base scale degrees; each one yields three voices.
    pub scale_degrees: Vec<f64>,
    /// Maximum detune of the low and high voice around each degree, in keys.
    pub jitter: f64,
}

impl Default for DroneParams {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            wander_min: 200.0,
            wander_max: 400.0,
            output_min: -1.0,
            output_max: 1.0,
            step_size: 0.015,
            durations: PhaseDurations::default(),
            scale_degrees: DEFAULT_SCALE_DEGREES.to_vec(),
            jitter: 0.07,
        }
    }
}

impl DroneParams {
    /// Parses params from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> AudioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes params as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> AudioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of voices a render with these params produces.
    pub fn voice_count(&self) -> usize {
        self.scale_degrees.len() * 3
    }

    /// Number of samples a phase of `seconds` spans at the configured rate.
    pub fn samples_for(&self, seconds: f64) -> usize {
        (seconds * self.sample_rate as f64).round() as usize
    }

    /// Checks every parameter, returning the first problem found.
    pub fn validate(&self) -> AudioResult<()> {
        if self.sample_rate == 0 || self.sample_rate > MAX_SAMPLE_RATE {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }

        for (phase, duration) in self.durations.named() {
            if !duration.is_finite() || duration <= 0.0 {
                return Err(AudioError::InvalidDuration { phase, duration });
            }
            if self.samples_for(duration) == 0 {
                return Err(AudioError::invalid_param(
                    format!("durations.{}", phase),
                    format!(
                        "{} seconds spans no samples at {} Hz",
                        duration, self.sample_rate
                    ),
                ));
            }
        }
        if self.durations.total() > MAX_TOTAL_SECONDS {
            return Err(AudioError::invalid_param(
                "durations",
                format!(
                    "total must be <= {} seconds, got {}",
                    MAX_TOTAL_SECONDS,
                    self.durations.total()
                ),
            ));
        }

        for freq in [self.wander_min, self.wander_max] {
            if !freq.is_finite() || freq <= 0.0 {
                return Err(AudioError::InvalidFrequency { freq });
            }
        }
        if self.wander_min >= self.wander_max {
            return Err(AudioError::invalid_param(
                "wander_min",
                format!(
                    "must be below wander_max ({} >= {})",
                    self.wander_min, self.wander_max
                ),
            ));
        }

        if !self.output_min.is_finite()
            || !self.output_max.is_finite()
            || self.output_min >= self.output_max
        {
            return Err(AudioError::invalid_param(
                "output_min",
                format!(
                    "output range [{}, {}] is empty or not finite",
                    self.output_min, self.output_max
                ),
            ));
        }

        if !self.step_size.is_finite() || self.step_size < 0.0 {
            return Err(AudioError::invalid_param(
                "step_size",
                format!("must be finite and >= 0, got {}", self.step_size),
            ));
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(AudioError::invalid_param(
                "jitter",
                format!("must be finite and >= 0, got {}", self.jitter),
            ));
        }

        if self.scale_degrees.is_empty() {
            return Err(AudioError::invalid_param(
                "scale_degrees",
                "at least one degree is required",
            ));
        }
        if let Some(bad) = self.scale_degrees.iter().find(|d| !d.is_finite()) {
            return Err(AudioError::invalid_param(
                "scale_degrees",
                format!("degree {} is not finite", bad),
            ));
        }

        Ok(())
    }
}
