//! Conversion between frequency (Hz) and continuous piano-key pitch.
//!
//! Key 49 is A4 (440 Hz); each unit is one equal-tempered semitone. Keys are
//! continuous, so fractional values describe pitches between semitones.

/// Frequency of the reference key, in Hz.
pub const REFERENCE_FREQ: f64 = 440.0;

/// Piano key number of the reference frequency.
pub const REFERENCE_KEY: f64 = 49.0;

/// Converts a frequency in Hz to a piano-key pitch.
///
/// `freq` must be positive; the result is not finite otherwise.
#[inline]
pub fn key_from_frequency(freq: f64) -> f64 {
    12.0 * (freq / REFERENCE_FREQ).log2() + REFERENCE_KEY
}

/// Converts a piano-key pitch to a frequency in Hz.
#[inline]
pub fn frequency_from_key(key: f64) -> f64 {
    REFERENCE_FREQ * 2.0_f64.powf((key - REFERENCE_KEY) / 12.0)
}
