//! Tests for the WAV writer module.

use super::format::{SampleEncoding, WavFormat};
use super::pcm::{compute_pcm_hash, extract_pcm_data};
use super::result::WavResult;
use super::writer::{
    chunk_sizes, encode_samples, samples_to_f32, samples_to_pcm16, write_wav, write_wav_to_vec,
};
use super::write_audio;

fn u16_at(data: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([data[pos], data[pos + 1]])
}

fn u32_at(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

// =========================================================================
// Format tests
// =========================================================================

#[test]
fn test_wav_format_pcm16() {
    let format = WavFormat::mono(44100, SampleEncoding::Pcm16);
    assert_eq!(format.bits_per_sample(), 16);
    assert_eq!(format.bytes_per_sample(), 2);
    assert_eq!(format.block_align(), 2);
    assert_eq!(format.byte_rate(), Some(88200));
    assert!(!format.is_extended());
}

#[test]
fn test_wav_format_float32() {
    let format = WavFormat::mono(48000, SampleEncoding::Float32);
    assert_eq!(format.bits_per_sample(), 32);
    assert_eq!(format.block_align(), 4);
    assert_eq!(format.byte_rate(), Some(192000));
    assert!(format.is_extended());
}

#[test]
fn test_byte_rate_overflow() {
    let format = WavFormat::mono(2_000_000_000, SampleEncoding::Float32);
    assert_eq!(format.byte_rate(), None);

    let mut out = Vec::new();
    let err = write_wav(&mut out, &format, &[0u8; 4]).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert!(out.is_empty());
}

#[test]
fn test_encoding_parse() {
    assert_eq!("pcm16".parse::<SampleEncoding>(), Ok(SampleEncoding::Pcm16));
    assert_eq!("FLOAT32".parse::<SampleEncoding>(), Ok(SampleEncoding::Float32));
    assert!("mp3".parse::<SampleEncoding>().is_err());
    assert_eq!(SampleEncoding::Float32.to_string(), "float32");
    assert_eq!(SampleEncoding::default(), SampleEncoding::Pcm16);
}

// =========================================================================
// Sample conversion tests
// =========================================================================

#[test]
fn test_samples_to_pcm16() {
    let pcm = samples_to_pcm16(&[0.0, 1.0, -1.0, 0.5]);
    assert_eq!(pcm.len(), 8);
    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 32767);
    assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -32767);
    assert_eq!(i16::from_le_bytes([pcm[6], pcm[7]]), 16384);
}

#[test]
fn test_samples_to_pcm16_clipping() {
    let pcm = samples_to_pcm16(&[2.5, -9.0]);
    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 32767);
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), -32767);
}

#[test]
fn test_samples_to_f32() {
    let data = samples_to_f32(&[0.25, -1.0, 1.5]);
    assert_eq!(data.len(), 12);
    assert_eq!(f32::from_le_bytes([data[0], data[1], data[2], data[3]]), 0.25);
    assert_eq!(f32::from_le_bytes([data[4], data[5], data[6], data[7]]), -1.0);
    // Float output is not clipped.
    assert_eq!(f32::from_le_bytes([data[8], data[9], data[10], data[11]]), 1.5);
}

#[test]
fn test_encode_samples_dispatch() {
    let samples = [0.1, -0.2];
    assert_eq!(encode_samples(&samples, SampleEncoding::Pcm16).len(), 4);
    assert_eq!(encode_samples(&samples, SampleEncoding::Float32).len(), 8);
}

// =========================================================================
// Header tests
// =========================================================================

#[test]
fn test_pcm16_header() {
    let format = WavFormat::mono(22050, SampleEncoding::Pcm16);
    let payload = samples_to_pcm16(&[0.0; 100]);
    let wav = write_wav_to_vec(&format, &payload).unwrap();

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32_at(&wav, 4), 36 + 200);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32_at(&wav, 16), 16);
    assert_eq!(u16_at(&wav, 20), 1);
    assert_eq!(u16_at(&wav, 22), 1);
    assert_eq!(u32_at(&wav, 24), 22050);
    assert_eq!(u16_at(&wav, 34), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32_at(&wav, 40), 200);
    assert_eq!(wav.len(), 44 + 200);
}

#[test]
fn test_float32_header() {
    let format = WavFormat::mono(44100, SampleEncoding::Float32);
    let payload = samples_to_f32(&[0.0; 10]);
    let wav = write_wav_to_vec(&format, &payload).unwrap();

    assert_eq!(u32_at(&wav, 16), 18);
    assert_eq!(u16_at(&wav, 20), 3);
    assert_eq!(u16_at(&wav, 34), 32);
    assert_eq!(u16_at(&wav, 36), 0);
    assert_eq!(&wav[38..42], b"fact");
    assert_eq!(u32_at(&wav, 46), 10);
    assert_eq!(&wav[50..54], b"data");
    assert_eq!(u32_at(&wav, 54), 40);
    assert_eq!(wav.len(), 58 + 40);
    assert_eq!(u32_at(&wav, 4) as usize, wav.len() - 8);
}

#[test]
fn test_chunk_sizes() {
    let pcm = WavFormat::mono(44100, SampleEncoding::Pcm16);
    assert_eq!(chunk_sizes(&pcm, 200).unwrap(), (236, 200));
    let float = WavFormat::mono(44100, SampleEncoding::Float32);
    assert_eq!(chunk_sizes(&float, 40).unwrap(), (90, 40));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_chunk_sizes_reject_oversized_payload() {
    let format = WavFormat::mono(44100, SampleEncoding::Float32);
    let too_big = u32::MAX as usize + 1;
    let err = chunk_sizes(&format, too_big).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);

    // Fits the data chunk but not the RIFF chunk around it.
    assert!(chunk_sizes(&format, u32::MAX as usize - 10).is_err());
}

// =========================================================================
// Hash and result tests
// =========================================================================

#[test]
fn test_extract_pcm_data_skips_fact_chunk() {
    let samples = [0.5, -0.5, 0.25];
    let result = WavResult::from_samples(&samples, 8000, SampleEncoding::Float32).unwrap();
    let payload = extract_pcm_data(&result.wav_data).unwrap();
    assert_eq!(payload, samples_to_f32(&samples).as_slice());
}

#[test]
fn test_extract_pcm_data_rejects_garbage() {
    assert!(extract_pcm_data(b"not a wav").is_none());
    assert!(extract_pcm_data(&[0u8; 64]).is_none());
}

#[test]
fn test_compute_pcm_hash_matches_result() {
    let samples: Vec<f64> = (0..500).map(|i| (i as f64 * 0.01).sin()).collect();
    for encoding in [SampleEncoding::Pcm16, SampleEncoding::Float32] {
        let result = WavResult::from_samples(&samples, 44100, encoding).unwrap();
        assert_eq!(compute_pcm_hash(&result.wav_data), Some(result.pcm_hash.clone()));
        assert_eq!(result.pcm_hash.len(), 64);
    }
}

#[test]
fn test_pcm_hash_differs_for_different_samples() {
    let a = WavResult::from_samples(&[0.1, 0.2], 44100, SampleEncoding::Pcm16).unwrap();
    let b = WavResult::from_samples(&[0.1, 0.3], 44100, SampleEncoding::Pcm16).unwrap();
    assert_ne!(a.pcm_hash, b.pcm_hash);
}

#[test]
fn test_result_duration() {
    let result = WavResult::from_samples(&vec![0.0; 22050], 44100, SampleEncoding::Pcm16).unwrap();
    assert_eq!(result.num_samples, 22050);
    assert!((result.duration_seconds() - 0.5).abs() < 1e-12);
}

#[test]
fn test_write_audio_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out.wav");
    let result = write_audio(&path, &[0.0, 0.5, -0.5], 8000, SampleEncoding::Pcm16).unwrap();

    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk, result.wav_data);
}

#[test]
fn test_write_audio_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be overwritten by a file.
    let err = write_audio(dir.path(), &[0.0], 8000, SampleEncoding::Pcm16).unwrap_err();
    assert!(!err.is_config_error());
}
