//! # Cadence DSP
//!
//! A beat and tempo analysis engine for rhythm gameplay: multi-band
//! spectral-flux onset detection, adaptive peak picking, comb-filter tempo
//! estimation with parabolic refinement and octave disambiguation, and
//! phase-aligned beat-grid construction.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cadence_dsp::{analyze, Sensitivity};
//!
//! // Decoded mono samples, normalized to [-1.0, 1.0]
//! let samples: Vec<f32> = vec![];
//! let sample_rate = 44100;
//!
//! let result = analyze(&samples, sample_rate, Sensitivity::default())?;
//!
//! println!("BPM: {:.1}, {} beats", result.bpm, result.beats.len());
//! # Ok::<(), cadence_dsp::AnalysisError>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! samples -> windowed FFT frames -> per-band flux -+-> full flux -> onsets -+
//!                                                  |                        +-> beats
//!                                                  +-> rhythm flux          |
//!                                                       -> onset strength -> BPM
//! ```
//!
//! One synchronous pass per track, no shared or persistent state: results are
//! fully determined by the input buffer and the sensitivity configuration, so
//! tracks can be analyzed in parallel from separate threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod spectrum;

pub use analysis::result::Analysis;
pub use config::Sensitivity;
pub use error::AnalysisError;

use config::{FFT_SIZE, HOP_SIZE};
use features::beat_tracking::grid::build_aligned_grid;
use features::onset::detect_onsets;
use features::onset::flux::{combine_flux, ONSET_WEIGHTS, RHYTHM_WEIGHTS};
use features::period::comb::{estimate_tempo, MIN_STRENGTH_SAMPLES};
use features::period::intervals::estimate_bpm_from_intervals;
use features::period::strength::onset_strength;
use spectrum::stft::compute_band_flux;

/// Analyze a mono sample buffer for beats and tempo
///
/// Runs the whole pipeline: framed spectral analysis into per-band flux, flux
/// combination, adaptive onset picking, onset-strength shaping and comb
/// tempo estimation, then grid alignment when requested. The engine never
/// decodes audio; the caller supplies decoded PCM.
///
/// Insufficient data (silence, buffers too short to frame, too few onsets)
/// yields an empty beat list and/or a BPM of 0.0, never an error.
///
/// # Arguments
///
/// * `samples` - Mono audio samples; never mutated
/// * `sample_rate` - Sample rate in Hz (must be > 0)
/// * `sensitivity` - Onset threshold, debounce and grid configuration
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `sample_rate` is 0; that is a
/// caller contract violation, not a property of the audio.
///
/// # Example
///
/// ```no_run
/// use cadence_dsp::{analyze, Sensitivity};
///
/// let samples = vec![0.0f32; 44100 * 30]; // 30 seconds of silence
/// let result = analyze(&samples, 44100, Sensitivity::default())?;
/// assert!(result.beats.is_empty());
/// # Ok::<(), cadence_dsp::AnalysisError>(())
/// ```
pub fn analyze(
    samples: &[f32],
    sample_rate: u32,
    sensitivity: Sensitivity,
) -> Result<Analysis, AnalysisError> {
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Sample rate must be > 0".to_string(),
        ));
    }

    log::debug!(
        "Starting beat analysis: {} samples at {} Hz, sensitivity {:?}",
        samples.len(),
        sample_rate,
        sensitivity
    );

    let bands = compute_band_flux(samples, sample_rate, FFT_SIZE, HOP_SIZE);
    if bands.is_empty() {
        return Ok(Analysis::empty());
    }

    let rhythm_flux = combine_flux(&bands, RHYTHM_WEIGHTS);
    let full_flux = combine_flux(&bands, ONSET_WEIGHTS);

    let onsets = detect_onsets(
        &full_flux,
        sample_rate,
        HOP_SIZE,
        sensitivity.threshold_multiplier,
        sensitivity.min_peak_interval,
    );

    let strength = onset_strength(&rhythm_flux);
    let hop_seconds = HOP_SIZE as f64 / sample_rate as f64;

    let mut bpm = estimate_tempo(&strength, hop_seconds);
    if bpm == 0.0 && strength.len() < MIN_STRENGTH_SAMPLES && onsets.len() >= 2 {
        // Track too short for comb scoring; the coarse interval histogram is
        // the explicit fallback here
        bpm = estimate_bpm_from_intervals(&onsets);
    }

    let beats = if sensitivity.use_grid && bpm > 0.0 && !onsets.is_empty() {
        build_aligned_grid(&onsets, Some(&strength), bpm, hop_seconds)
    } else {
        onsets
    };

    log::debug!("Analysis complete: {} beats, {:.2} BPM", beats.len(), bpm);

    Ok(Analysis { beats, bpm })
}
