//! WAV file format parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How samples are stored in the data chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleEncoding {
    /// 16-bit signed integer PCM, clipped to [-1, 1].
    #[default]
    Pcm16,
    /// 32-bit IEEE float, unclipped.
    Float32,
}

impl SampleEncoding {
    /// Bits per stored sample.
    pub fn bits_per_sample(&self) -> u16 {
        match self {
            SampleEncoding::Pcm16 => 16,
            SampleEncoding::Float32 => 32,
        }
    }

    /// `wFormatTag` value of the fmt chunk.
    pub fn format_tag(&self) -> u16 {
        match self {
            SampleEncoding::Pcm16 => 1,
            SampleEncoding::Float32 => 3,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleEncoding::Pcm16 => "pcm16",
            SampleEncoding::Float32 => "float32",
        }
    }
}

impl fmt::Display for SampleEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pcm16" | "pcm" | "int16" => Ok(SampleEncoding::Pcm16),
            "float32" | "float" | "f32" => Ok(SampleEncoding::Float32),
            other => Err(format!(
                "unknown sample encoding '{}' (expected pcm16 or float32)",
                other
            )),
        }
    }
}

/// WAV file format parameters. Output is always mono.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Sample storage.
    pub encoding: SampleEncoding,
}

impl WavFormat {
    /// Number of channels.
    pub const CHANNELS: u16 = 1;

    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32, encoding: SampleEncoding) -> Self {
        Self {
            sample_rate,
            encoding,
        }
    }

    /// Bits per sample.
    pub fn bits_per_sample(&self) -> u16 {
        self.encoding.bits_per_sample()
    }

    /// Calculates bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample() / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        Self::CHANNELS * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    ///
    /// Returns `None` if the rate does not fit the 32-bit header field.
    pub(crate) fn byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(self.block_align() as u32)
    }

    /// True for encodings that need the extended fmt chunk and a fact chunk.
    pub(crate) fn is_extended(&self) -> bool {
        self.encoding != SampleEncoding::Pcm16
    }
}
