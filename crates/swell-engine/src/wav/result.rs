//! WAV file generation result type.

use std::path::Path;

use crate::error::AudioResult;

use super::format::{SampleEncoding, WavFormat};
use super::writer::{encode_samples, write_wav_to_vec};

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the sample payload only.
    pub pcm_hash: String,
    /// Sample storage used.
    pub encoding: SampleEncoding,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples into a complete WAV file.
    ///
    /// Fails with [`AudioError::Io`](crate::error::AudioError::Io) when the
    /// file would overflow the WAV size fields.
    pub fn from_samples(
        samples: &[f64],
        sample_rate: u32,
        encoding: SampleEncoding,
    ) -> AudioResult<Self> {
        let payload = encode_samples(samples, encoding);
        let pcm_hash = blake3::hash(&payload).to_hex().to_string();
        let format = WavFormat::mono(sample_rate, encoding);
        let wav_data = write_wav_to_vec(&format, &payload)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            encoding,
            sample_rate,
            num_samples: samples.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the file to `path`, creating parent directories as needed.
    pub fn write_to(&self, path: impl AsRef<Path>) -> AudioResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &self.wav_data)?;
        tracing::debug!(
            path = %path.display(),
            bytes = self.wav_data.len(),
            "wrote wav"
        );
        Ok(())
    }
}
