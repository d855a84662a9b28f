//! Deterministic mono WAV writer.
//!
//! Files carry no timestamps or variable metadata, so identical samples
//! always produce identical bytes. The BLAKE3 hash of the sample payload
//! identifies a render independently of the container.

mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::error::AudioResult;

pub use format::{SampleEncoding, WavFormat};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{encode_samples, samples_to_f32, samples_to_pcm16, write_wav, write_wav_to_vec};

/// Encodes `samples` and persists them as a single-channel WAV file.
///
/// Write failures surface as [`AudioError::Io`](crate::error::AudioError::Io).
pub fn write_audio(
    path: impl AsRef<Path>,
    samples: &[f64],
    sample_rate: u32,
    encoding: SampleEncoding,
) -> AudioResult<WavResult> {
    let result = WavResult::from_samples(samples, sample_rate, encoding)?;
    result.write_to(path)?;
    Ok(result)
}
