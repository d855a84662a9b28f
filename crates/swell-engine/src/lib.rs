//! Swell Drone Engine
//!
//! Renders a multi-voice additive sine drone: voices wander randomly inside a
//! frequency band, glide onto the notes of a target chord, hold it, and fade
//! out.
//!
//! # Overview
//!
//! A render runs through four contiguous phases:
//!
//! - **Wander** - every voice takes a bounded random walk in pitch
//! - **Stabilize** - every voice glides linearly onto its target pitch
//! - **Hold** - pitches are frozen at full amplitude
//! - **Decrescendo** - pitches stay frozen while the amplitude falls to zero
//!
//! The amplitude rises in a single ramp across wander and stabilize. After the
//! last sample the buffer is rescaled onto the configured output range.
//!
//! # Determinism
//!
//! All randomness comes from one PCG32 generator seeded from a 32-bit seed.
//! Given the same params and seed the output is byte-identical across runs
//! (on the same platform).
//!
//! # Example
//!
//! ```no_run
//! use swell_engine::{render, DroneParams, SampleEncoding};
//!
//! let params = DroneParams::default();
//! let result = render(&params, 42, SampleEncoding::Pcm16)?;
//! result.wav.write_to("swell.wav")?;
//! println!("PCM hash: {}", result.wav.pcm_hash);
//! # Ok::<(), swell_engine::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate`] - Render entry points
//! - [`normalize`] - Output rescaling
//! - [`params`] - Render parameters and validation
//! - [`pitch`] - Frequency / piano-key conversion
//! - [`rng`] - Deterministic RNG
//! - [`schedule`] - Phase boundaries and amplitude envelope
//! - [`simulate`] - Per-sample voice simulation
//! - [`voice`] - Voice state and pitch update rules
//! - [`wav`] - Deterministic WAV file writer

pub mod error;
pub mod generate;
pub mod normalize;
pub mod params;
pub mod pitch;
pub mod rng;
pub mod schedule;
pub mod simulate;
pub mod voice;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{render, render_with_voices, RenderResult};
pub use params::{DroneParams, PhaseDurations};
pub use schedule::{Phase, Schedule};
pub use voice::{Voice, VoiceTargets, WanderBand};
pub use wav::{write_audio, SampleEncoding, WavResult};
