//! Voice state and the per-phase pitch update rules.
//!
//! A [`Voice`] is one sine partial. Its pitch is continuous (piano-key units),
//! its oscillator phase is kept in `[0, 2π)`, and its target is fixed for the
//! lifetime of the render.

use std::f64::consts::TAU;

use rand::Rng;

use crate::pitch::{frequency_from_key, key_from_frequency};

/// Frequency band voices are confined to while wandering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderBand {
    min_freq: f64,
    max_freq: f64,
}

impl WanderBand {
    /// Creates a band from its frequency bounds in Hz.
    ///
    /// The bounds must be positive with `min_freq < max_freq`;
    /// [`DroneParams::validate`](crate::params::DroneParams::validate) checks this.
    pub fn new(min_freq: f64, max_freq: f64) -> Self {
        Self { min_freq, max_freq }
    }

    /// Lower bound in Hz.
    pub fn min_freq(&self) -> f64 {
        self.min_freq
    }

    /// Upper bound in Hz.
    pub fn max_freq(&self) -> f64 {
        self.max_freq
    }

    /// Lower bound as a piano-key pitch.
    pub fn min_key(&self) -> f64 {
        key_from_frequency(self.min_freq)
    }

    /// Upper bound as a piano-key pitch.
    pub fn max_key(&self) -> f64 {
        key_from_frequency(self.max_freq)
    }

    /// Returns true if `freq` lies inside the band, bounds included.
    #[inline]
    pub fn contains(&self, freq: f64) -> bool {
        freq >= self.min_freq && freq <= self.max_freq
    }
}

/// Ordered target pitches, three per base scale degree.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceTargets(Vec<f64>);

impl VoiceTargets {
    /// Builds targets around `degrees`.
    ///
    /// Each degree `d` contributes, in order, a low voice `d - u·jitter`, the
    /// degree itself, and a high voice `d + u·jitter`, with `u` drawn
    /// uniformly from `[0, 1)` for the low and high voice separately.
    pub fn jittered<R: Rng>(degrees: &[f64], jitter: f64, rng: &mut R) -> Self {
        let mut targets = Vec::with_capacity(degrees.len() * 3);
        for &degree in degrees {
            targets.push(degree - rng.gen::<f64>() * jitter);
            targets.push(degree);
            targets.push(degree + rng.gen::<f64>() * jitter);
        }
        Self(targets)
    }

    /// Wraps an explicit list of target pitches.
    pub fn from_pitches(pitches: Vec<f64>) -> Self {
        Self(pitches)
    }

    /// Target pitches in voice order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no targets.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One sine partial of the drone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voice {
    /// Current pitch in piano-key units.
    pub pitch: f64,
    /// Oscillator phase in radians, within `[0, 2π)`.
    pub phase: f64,
    /// Pitch the voice converges to.
    pub target: f64,
}

impl Voice {
    /// Creates a voice at `pitch` with zero phase.
    pub fn new(pitch: f64, target: f64) -> Self {
        Self {
            pitch,
            phase: 0.0,
            target,
        }
    }

    /// Current frequency in Hz.
    #[inline]
    pub fn frequency(&self) -> f64 {
        frequency_from_key(self.pitch)
    }

    /// Takes one random-walk step of `-step`, `0` or `+step` keys.
    ///
    /// A step that would leave `band` is rejected and the pitch stays put, so
    /// a voice parked on a bound may reject several steps in a row. The kept
    /// pitch, not the rejected candidate, drives the oscillator that sample.
    #[inline]
    pub fn wander<R: Rng>(&mut self, step: f64, band: &WanderBand, rng: &mut R) {
        let direction = rng.gen_range(-1i32..=1) as f64;
        let candidate = self.pitch + direction * step;
        if band.contains(frequency_from_key(candidate)) {
            self.pitch = candidate;
        }
    }

    /// Moves the pitch one sample closer to the target.
    ///
    /// `remaining` is the number of samples left until the voice must sit on
    /// its target, counting the current one. The slope is recomputed from the
    /// current pitch every call, so rounding from earlier samples is corrected
    /// on the way. With one sample left (or none) the pitch snaps to the target.
    #[inline]
    pub fn glide(&mut self, remaining: usize) {
        if remaining <= 1 {
            self.pitch = self.target;
            return;
        }
        let slope = (self.target - self.pitch) / remaining as f64;
        self.pitch += slope;
    }

    /// Advances the oscillator by one sample and returns `sin(phase)`.
    #[inline]
    pub fn oscillate(&mut self, sample_rate: f64) -> f64 {
        self.phase = wrap_phase(self.phase + TAU * self.frequency() / sample_rate);
        self.phase.sin()
    }
}

/// Wraps an angle into `[0, 2π)`.
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    let wrapped = phase.rem_euclid(TAU);
    // rem_euclid can round up to TAU itself for inputs just below a multiple.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Creates one voice per target with a uniformly random start pitch in `band`.
pub fn spawn_voices<R: Rng>(
    targets: &VoiceTargets,
    band: &WanderBand,
    rng: &mut R,
) -> Vec<Voice> {
    let low = band.min_key();
    let high = band.max_key();
    targets
        .as_slice()
        .iter()
        .map(|&target| {
            let mut pitch = rng.gen_range(low..=high);
            // Keep the conversion round trip from nudging the start outside.
            while !band.contains(frequency_from_key(pitch)) {
                pitch = rng.gen_range(low..=high);
            }
            Voice::new(pitch, target)
        })
        .collect()
}
