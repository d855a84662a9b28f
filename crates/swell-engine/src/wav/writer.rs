//! Core WAV writing and sample conversion functions.

use std::io::{self, Write};

use super::format::{SampleEncoding, WavFormat};

fn too_large(what: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{} does not fit a 32-bit WAV header", what),
    )
}

/// Size fields of a WAV file holding `payload_len` bytes of samples.
///
/// Returns `(riff_size, data_size)`, or an error when either exceeds the
/// 32-bit limit of the RIFF container.
pub(crate) fn chunk_sizes(format: &WavFormat, payload_len: usize) -> io::Result<(u32, u32)> {
    let data_size = u32::try_from(payload_len).map_err(|_| too_large("sample payload"))?;
    let (fmt_size, fact_size): (u32, u32) = if format.is_extended() { (18, 12) } else { (16, 0) };
    // Everything after the 8-byte RIFF header.
    let riff_size = (4 + 8 + fmt_size + fact_size + 8)
        .checked_add(data_size)
        .ok_or_else(|| too_large("RIFF chunk"))?;
    Ok((riff_size, data_size))
}

/// Writes a complete mono WAV file to a writer.
///
/// Float files get the 18-byte fmt chunk and a fact chunk, as required for
/// non-PCM formats. Files too large for the 32-bit size fields are rejected
/// with [`io::ErrorKind::InvalidInput`] before anything is written.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, payload: &[u8]) -> io::Result<()> {
    let (riff_size, data_size) = chunk_sizes(format, payload.len())?;
    let byte_rate = format.byte_rate().ok_or_else(|| too_large("byte rate"))?;
    let extended = format.is_extended();
    let fmt_size: u32 = if extended { 18 } else { 16 };

    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&fmt_size.to_le_bytes())?;
    writer.write_all(&format.encoding.format_tag().to_le_bytes())?;
    writer.write_all(&WavFormat::CHANNELS.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample().to_le_bytes())?;
    if extended {
        writer.write_all(&0u16.to_le_bytes())?; // cbSize
        let frames = data_size / format.block_align() as u32;
        writer.write_all(b"fact")?;
        writer.write_all(&4u32.to_le_bytes())?;
        writer.write_all(&frames.to_le_bytes())?;
    }

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(payload)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, payload: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(58 + payload.len());
    write_wav(&mut buffer, format, payload)?;
    Ok(buffer)
}

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Samples are expected to be in range [-1.0, 1.0]. Values outside this range
/// will be clipped.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}

/// Converts f64 samples to little-endian 32-bit float bytes.
pub fn samples_to_f32(samples: &[f64]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * 4);

    for &sample in samples {
        data.extend_from_slice(&(sample as f32).to_le_bytes());
    }

    data
}

/// Encodes samples for the data chunk.
pub fn encode_samples(samples: &[f64], encoding: SampleEncoding) -> Vec<u8> {
    match encoding {
        SampleEncoding::Pcm16 => samples_to_pcm16(samples),
        SampleEncoding::Float32 => samples_to_f32(samples),
    }
}
