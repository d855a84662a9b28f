//! Phase simulator.
//!
//! Walks the timeline one sample at a time. For each sample it looks up the
//! active phase, applies that phase's pitch rule to every voice in
//! construction order, advances each oscillator and sums the voices into the
//! output buffer. Phase accumulation is sequential per voice, so samples are
//! never processed out of order.

use rand::Rng;

use crate::schedule::{Phase, Schedule};
use crate::voice::{Voice, WanderBand};

/// Drives a set of voices across a [`Schedule`].
#[derive(Debug)]
pub struct Simulator<'a, R: Rng> {
    schedule: &'a Schedule,
    band: WanderBand,
    step_size: f64,
    rng: &'a mut R,
}

impl<'a, R: Rng> Simulator<'a, R> {
    /// Creates a simulator drawing wander steps from `rng`.
    pub fn new(schedule: &'a Schedule, band: WanderBand, step_size: f64, rng: &'a mut R) -> Self {
        Self {
            schedule,
            band,
            step_size,
            rng,
        }
    }

    /// The schedule being simulated.
    pub fn schedule(&self) -> &Schedule {
        self.schedule
    }

    /// Computes sample `t`, updating every voice in place.
    ///
    /// Sample 0 sits at zero amplitude and is emitted as silence without
    /// touching the voices.
    pub fn step(&mut self, voices: &mut [Voice], t: usize) -> f64 {
        if t == 0 {
            return 0.0;
        }

        let phase = self.schedule.phase_at(t);
        let amplitude = self.schedule.amplitude_at(t);
        let sample_rate = self.schedule.sample_rate() as f64;
        let remaining = self.schedule.samples_until_stable(t);

        let mut sample = 0.0;
        for voice in voices.iter_mut() {
            match phase {
                Phase::Wander => voice.wander(self.step_size, &self.band, &mut *self.rng),
                Phase::Stabilize => voice.glide(remaining),
                Phase::Hold | Phase::Decrescendo => {}
            }
            sample += amplitude * voice.oscillate(sample_rate);
        }
        sample
    }

    /// Renders the whole timeline into a raw (unnormalized) buffer.
    pub fn run(&mut self, voices: &mut [Voice]) -> Vec<f64> {
        let t_max = self.schedule.t_max();
        let mut output = vec![0.0; t_max];

        for phase in Phase::ALL {
            let range = self.schedule.range(phase);
            tracing::debug!(
                phase = %phase,
                start = range.start,
                end = range.end,
                voices = voices.len(),
                "entering phase"
            );
            for t in range {
                output[t] = self.step(voices, t);
            }
        }

        output
    }
}
