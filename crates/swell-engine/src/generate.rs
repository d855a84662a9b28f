//! Main entry point for drone rendering.
//!
//! Validates params, builds the schedule, spawns the voices, runs the
//! simulator, normalizes the buffer and encodes it as WAV.

use std::f64::consts::TAU;

use rand::Rng;

use crate::error::{AudioError, AudioResult};
use crate::normalize::rescale;
use crate::params::DroneParams;
use crate::rng::create_rng;
use crate::schedule::Schedule;
use crate::simulate::Simulator;
use crate::voice::{spawn_voices, Voice, VoiceTargets, WanderBand};
use crate::wav::{SampleEncoding, WavResult};

/// Result of a render.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Normalized samples.
    pub samples: Vec<f64>,
    /// Encoded WAV file.
    pub wav: WavResult,
    /// Number of voices simulated.
    pub num_voices: usize,
    /// Total number of samples.
    pub t_max: usize,
    /// Smallest raw sample before normalization.
    pub raw_min: f64,
    /// Largest raw sample before normalization.
    pub raw_max: f64,
    /// Voices as they stood after the last sample.
    pub final_voices: Vec<Voice>,
}

/// Renders a drone with voices and targets drawn from `seed`.
///
/// Identical params and seed always produce identical samples.
pub fn render(params: &DroneParams, seed: u32, encoding: SampleEncoding) -> AudioResult<RenderResult> {
    params.validate()?;

    let mut rng = create_rng(seed);
    let band = WanderBand::new(params.wander_min, params.wander_max);
    let targets = VoiceTargets::jittered(&params.scale_degrees, params.jitter, &mut rng);
    let voices = spawn_voices(&targets, &band, &mut rng);

    tracing::debug!(seed, voices = voices.len(), "spawned voices");
    render_with_voices(params, voices, &mut rng, encoding)
}

/// Rejects voices that would break the wander band or poison the output.
fn check_voices(voices: &[Voice], band: &WanderBand) -> AudioResult<()> {
    if voices.is_empty() {
        return Err(AudioError::invalid_param("voices", "at least one voice is required"));
    }

    for (index, voice) in voices.iter().enumerate() {
        if !voice.pitch.is_finite() || !voice.target.is_finite() {
            return Err(AudioError::invalid_param(
                "voices",
                format!(
                    "voice {}: pitch {} / target {} is not finite",
                    index, voice.pitch, voice.target
                ),
            ));
        }
        if !band.contains(voice.frequency()) {
            return Err(AudioError::invalid_param(
                "voices",
                format!(
                    "voice {}: start frequency {:.3} Hz is outside [{}, {}] Hz",
                    index,
                    voice.frequency(),
                    band.min_freq(),
                    band.max_freq()
                ),
            ));
        }
        if !(0.0..TAU).contains(&voice.phase) {
            return Err(AudioError::invalid_param(
                "voices",
                format!("voice {}: phase {} is outside [0, 2π)", index, voice.phase),
            ));
        }
    }

    Ok(())
}

/// Renders a drone from caller-supplied voices.
///
/// `rng` supplies the wander steps. Voices keep their order; the first voice
/// is always updated first. Every voice must start inside the wander band
/// with a phase in `[0, 2π)`.
pub fn render_with_voices<R: Rng>(
    params: &DroneParams,
    mut voices: Vec<Voice>,
    rng: &mut R,
    encoding: SampleEncoding,
) -> AudioResult<RenderResult> {
    let schedule = Schedule::from_params(params)?;
    let band = WanderBand::new(params.wander_min, params.wander_max);
    check_voices(&voices, &band)?;

    let mut samples =
        Simulator::new(&schedule, band, params.step_size, rng).run(&mut voices);

    let extremes = rescale(&mut samples, params.output_min, params.output_max).ok_or_else(|| {
        AudioError::invalid_param("durations", "render produced no samples")
    })?;

    tracing::info!(
        samples = samples.len(),
        voices = voices.len(),
        raw_min = extremes.min,
        raw_max = extremes.max,
        "render complete"
    );

    let wav = WavResult::from_samples(&samples, params.sample_rate, encoding)?;

    Ok(RenderResult {
        samples,
        wav,
        num_voices: voices.len(),
        t_max: schedule.t_max(),
        raw_min: extremes.min,
        raw_max: extremes.max,
        final_voices: voices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::PhaseDurations;
    use crate::pitch::key_from_frequency;

    fn quick_params() -> DroneParams {
        DroneParams {
            sample_rate: 2000,
            durations: PhaseDurations::new(0.25, 0.25, 0.25, 0.25),
            ..DroneParams::default()
        }
    }

    #[test]
    fn test_render_shape() {
        let result = render(&quick_params(), 42, SampleEncoding::Pcm16).unwrap();
        assert_eq!(result.t_max, 2000);
        assert_eq!(result.samples.len(), 2000);
        assert_eq!(result.num_voices, 33);
        assert_eq!(result.wav.num_samples, 2000);
        assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
        assert!(result.raw_min < result.raw_max);
    }

    #[test]
    fn test_render_determinism() {
        let a = render(&quick_params(), 7, SampleEncoding::Pcm16).unwrap();
        let b = render(&quick_params(), 7, SampleEncoding::Pcm16).unwrap();
        let c = render(&quick_params(), 8, SampleEncoding::Pcm16).unwrap();
        assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
        assert_eq!(a.wav.wav_data, b.wav.wav_data);
        assert_ne!(a.wav.pcm_hash, c.wav.pcm_hash);
    }

    #[test]
    fn test_render_rejects_bad_params() {
        let params = DroneParams {
            wander_min: 500.0,
            ..quick_params()
        };
        let err = render(&params, 1, SampleEncoding::Pcm16).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_render_with_no_voices_rejected() {
        let mut rng = create_rng(1);
        let err = render_with_voices(&quick_params(), vec![], &mut rng, SampleEncoding::Pcm16)
            .unwrap_err();
        assert!(err.to_string().contains("voices"));
    }

    #[test]
    fn test_render_with_out_of_band_voice_rejected() {
        let params = quick_params();
        let band = WanderBand::new(params.wander_min, params.wander_max);
        // Key 60 is about 784 Hz, far above the 200-400 Hz band.
        let voices = vec![Voice::new(key_from_frequency(300.0), 49.0), Voice::new(60.0, 49.0)];
        assert!(!band.contains(voices[1].frequency()));

        let mut rng = create_rng(1);
        let err = render_with_voices(&params, voices, &mut rng, SampleEncoding::Pcm16)
            .unwrap_err();
        assert!(err.is_config_error());
        let message = err.to_string();
        assert!(message.contains("voice 1"), "{}", message);
        assert!(message.contains("outside"), "{}", message);
    }

    #[test]
    fn test_render_with_voices_near_band_edges_accepted() {
        let params = quick_params();
        let voices = vec![
            Voice::new(key_from_frequency(params.wander_min + 1e-6), 40.0),
            Voice::new(key_from_frequency(params.wander_max - 1e-6), 45.0),
        ];

        let mut rng = create_rng(1);
        let result =
            render_with_voices(&params, voices, &mut rng, SampleEncoding::Pcm16).unwrap();
        assert!(result.samples.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_render_with_bad_phase_rejected() {
        let params = quick_params();
        let start = key_from_frequency(300.0);

        for phase in [f64::NAN, f64::INFINITY, -0.5, TAU, 10.0] {
            let mut voice = Voice::new(start, 49.0);
            voice.phase = phase;

            let mut rng = create_rng(1);
            let err = render_with_voices(&params, vec![voice], &mut rng, SampleEncoding::Pcm16)
                .unwrap_err();
            assert!(err.to_string().contains("phase"), "phase {} accepted", phase);
        }
    }

    #[test]
    fn test_render_with_non_finite_target_rejected() {
        let mut rng = create_rng(1);
        let voices = vec![Voice::new(key_from_frequency(300.0), f64::NAN)];
        let err = render_with_voices(&quick_params(), voices, &mut rng, SampleEncoding::Pcm16)
            .unwrap_err();
        assert!(err.to_string().contains("not finite"));
    }

    #[test]
    fn test_render_rejects_excessive_sample_rate() {
        let params = DroneParams {
            sample_rate: 2_000_000_000,
            durations: PhaseDurations::new(1e-9, 1e-9, 1e-9, 1e-9),
            scale_degrees: vec![49.0],
            ..DroneParams::default()
        };
        let err = render(&params, 1, SampleEncoding::Float32).unwrap_err();
        assert!(matches!(err, AudioError::InvalidSampleRate { .. }));
    }

    #[test]
    fn test_final_voices_sit_on_targets() {
        let result = render(&quick_params(), 3, SampleEncoding::Float32).unwrap();
        for voice in &result.final_voices {
            assert!((voice.pitch - voice.target).abs() < 1e-6);
        }
    }
}
