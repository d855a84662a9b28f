//! Envelope scheduler.
//!
//! Splits the sample timeline into four contiguous phases and computes the
//! amplitude multiplier for every sample index:
//!
//! ```text
//!  amp
//!  1.0 |              ________________
//!      |         ___/                 \___
//!      |     ___/                         \___
//!  0.0 |____/                                 \
//!      +---------+---------+--------+---------+--> t
//!        wander   stabilize   hold   decrescendo
//! ```
//!
//! The crescendo is a single ramp spanning both wander and stabilize, so the
//! amplitude only reaches 1.0 where stabilize ends.

use std::fmt;
use std::ops::Range;

use crate::error::AudioResult;
use crate::params::DroneParams;

/// One of the four sequential phases of a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Bounded random walk inside the wander band.
    Wander,
    /// Linear glide of every voice onto its target.
    Stabilize,
    /// Pitches frozen at full amplitude.
    Hold,
    /// Pitches frozen while the amplitude falls to zero.
    Decrescendo,
}

impl Phase {
    /// All phases in timeline order.
    pub const ALL: [Phase; 4] = [
        Phase::Wander,
        Phase::Stabilize,
        Phase::Hold,
        Phase::Decrescendo,
    ];

    /// Lowercase phase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Wander => "wander",
            Phase::Stabilize => "stabilize",
            Phase::Hold => "hold",
            Phase::Decrescendo => "decrescendo",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase boundaries as absolute sample indices.
///
/// Invariant: `0 < wander_end < stabilize_end < hold_end < t_max`, so the four
/// ranges are non-empty, contiguous and together cover `[0, t_max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    sample_rate: u32,
    wander_end: usize,
    stabilize_end: usize,
    hold_end: usize,
    t_max: usize,
}

impl Schedule {
    /// Builds the schedule for validated params.
    pub fn from_params(params: &DroneParams) -> AudioResult<Self> {
        params.validate()?;

        let d = &params.durations;
        let wander_end = params.samples_for(d.wander);
        let stabilize_end = wander_end + params.samples_for(d.stabilize);
        let hold_end = stabilize_end + params.samples_for(d.hold);
        let t_max = hold_end + params.samples_for(d.decrescendo);

        Ok(Self {
            sample_rate: params.sample_rate,
            wander_end,
            stabilize_end,
            hold_end,
            t_max,
        })
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Total number of samples.
    pub fn t_max(&self) -> usize {
        self.t_max
    }

    /// First sample after the combined wander and stabilize span.
    pub fn crescendo_end(&self) -> usize {
        self.stabilize_end
    }

    /// Sample index range covered by `phase`.
    pub fn range(&self, phase: Phase) -> Range<usize> {
        match phase {
            Phase::Wander => 0..self.wander_end,
            Phase::Stabilize => self.wander_end..self.stabilize_end,
            Phase::Hold => self.stabilize_end..self.hold_end,
            Phase::Decrescendo => self.hold_end..self.t_max,
        }
    }

    /// Phase active at sample `t`. Indices past the end report `Decrescendo`.
    pub fn phase_at(&self, t: usize) -> Phase {
        if t < self.wander_end {
            Phase::Wander
        } else if t < self.stabilize_end {
            Phase::Stabilize
        } else if t < self.hold_end {
            Phase::Hold
        } else {
            Phase::Decrescendo
        }
    }

    /// Samples left until every voice must sit on its target.
    ///
    /// Zero at or after the end of stabilize.
    pub fn samples_until_stable(&self, t: usize) -> usize {
        self.stabilize_end.saturating_sub(t)
    }

    /// Amplitude multiplier at sample `t`.
    pub fn amplitude_at(&self, t: usize) -> f64 {
        match self.phase_at(t) {
            Phase::Wander | Phase::Stabilize => {
                if t == 0 {
                    0.0
                } else {
                    t as f64 / self.stabilize_end as f64
                }
            }
            Phase::Hold => 1.0,
            Phase::Decrescendo => {
                let remaining = self.t_max.saturating_sub(t);
                remaining as f64 / (self.t_max - self.hold_end) as f64
            }
        }
    }
}
