//! Output normalization.
//!
//! Maps the raw summed buffer linearly onto a fixed output range so the
//! quietest sample lands on `output_min` and the loudest on `output_max`.

/// Extremes of a buffer before rescaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes {
    /// Smallest sample value.
    pub min: f64,
    /// Largest sample value.
    pub max: f64,
}

impl Extremes {
    /// Scans `samples` for their minimum and maximum.
    ///
    /// Returns `None` for an empty buffer.
    pub fn of(samples: &[f64]) -> Option<Self> {
        let first = *samples.first()?;
        let (min, max) = samples
            .iter()
            .fold((first, first), |(lo, hi), &s| (lo.min(s), hi.max(s)));
        Some(Self { min, max })
    }

    /// Distance between the extremes.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Rescales `samples` in place onto `[output_min, output_max]`.
///
/// A flat buffer (every sample equal) has no range to stretch and is
/// replaced by silence. Returns the extremes seen before rescaling.
pub fn rescale(samples: &mut [f64], output_min: f64, output_max: f64) -> Option<Extremes> {
    let extremes = Extremes::of(samples)?;
    let span = extremes.span();

    if span <= 0.0 || !span.is_finite() {
        samples.iter_mut().for_each(|s| *s = 0.0);
        return Some(extremes);
    }

    let out_span = output_max - output_min;
    for sample in samples.iter_mut() {
        *sample = (*sample - extremes.min) / span * out_span + output_min;
    }

    Some(extremes)
}
