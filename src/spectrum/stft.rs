//! Framed spectral analysis
//!
//! Slides a Hann-windowed frame across the signal, computes one-sided
//! magnitude spectra with the transform kernel, and reduces consecutive
//! spectra into per-band spectral flux: the sum of positive magnitude
//! increases restricted to the bass (<200 Hz), mid (200-2000 Hz) and high
//! (>2000 Hz) bands. One flux entry per frame transition.
//!
//! Frame index maps to time as `frame * hop_size / sample_rate`.

use crate::config::{BASS_EDGE_HZ, MID_EDGE_HZ};
use crate::spectrum::fft::fft_in_place;

/// Per-band spectral flux sequences, one entry per frame transition
#[derive(Debug, Clone, Default)]
pub struct BandFlux {
    /// Positive magnitude increase summed below 200 Hz
    pub bass: Vec<f32>,
    /// Positive magnitude increase summed over 200-2000 Hz
    pub mid: Vec<f32>,
    /// Positive magnitude increase summed above 2000 Hz
    pub high: Vec<f32>,
}

impl BandFlux {
    /// Number of frame transitions covered
    pub fn len(&self) -> usize {
        self.bass.len()
    }

    /// True when the input was too short for even two analysis frames
    pub fn is_empty(&self) -> bool {
        self.bass.is_empty()
    }
}

/// Compute per-band spectral flux over Hann-windowed frames
///
/// Computes `num_frames = (len - fft_size) / hop_size` frames; fewer than two
/// frames yields empty sequences (too short to analyze). Spectrum and scratch
/// buffers are allocated once and reused across frames.
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `sample_rate` - Sample rate in Hz (must be > 0, validated by the caller)
/// * `fft_size` - Analysis frame length (power of two)
/// * `hop_size` - Samples between consecutive frame starts
///
/// # Panics
///
/// Panics if `fft_size` is not a power of two or `hop_size` is zero; both are
/// caller contract violations.
pub fn compute_band_flux(
    samples: &[f32],
    sample_rate: u32,
    fft_size: usize,
    hop_size: usize,
) -> BandFlux {
    assert!(fft_size.is_power_of_two(), "fft_size must be a power of two");
    assert!(hop_size > 0, "hop_size must be > 0");

    let num_frames = if samples.len() >= fft_size {
        (samples.len() - fft_size) / hop_size
    } else {
        0
    };

    if num_frames < 2 {
        log::debug!(
            "Too few frames for band flux ({} samples, {} frames), returning empty",
            samples.len(),
            num_frames
        );
        return BandFlux::default();
    }

    log::debug!(
        "Computing band flux: {} samples at {} Hz, fft={}, hop={}, {} frames",
        samples.len(),
        sample_rate,
        fft_size,
        hop_size,
        num_frames
    );

    let half = fft_size / 2;

    // Bin index boundaries for the three bands: bass covers bins strictly
    // below 200 Hz, mid runs through 2000 Hz inclusive, high is the rest
    let bin_hz = sample_rate as f32 / fft_size as f32;
    let bass_end = ((BASS_EDGE_HZ / bin_hz).ceil() as usize).min(half);
    let mid_end = ((MID_EDGE_HZ / bin_hz).floor() as usize + 1).min(half);

    // Hann window, precomputed once
    let window: Vec<f32> = (0..fft_size)
        .map(|i| {
            0.5 * (1.0
                - (2.0 * std::f32::consts::PI * i as f32 / (fft_size - 1) as f32).cos())
        })
        .collect();

    let mut real = vec![0.0f32; fft_size];
    let mut imag = vec![0.0f32; fft_size];
    let mut prev_spectrum = vec![0.0f32; half];
    let mut spectrum = vec![0.0f32; half];

    let mut flux = BandFlux {
        bass: Vec::with_capacity(num_frames - 1),
        mid: Vec::with_capacity(num_frames - 1),
        high: Vec::with_capacity(num_frames - 1),
    };

    for frame in 0..num_frames {
        let offset = frame * hop_size;

        // Windowed copy into the scratch buffers, zero-padding past the end
        let available = samples.len().saturating_sub(offset).min(fft_size);
        for i in 0..available {
            real[i] = samples[offset + i] * window[i];
        }
        real[available..].fill(0.0);
        imag.fill(0.0);

        fft_in_place(&mut real, &mut imag);

        for i in 0..half {
            spectrum[i] = (real[i] * real[i] + imag[i] * imag[i]).sqrt();
        }

        if frame > 0 {
            let mut bass = 0.0f32;
            let mut mid = 0.0f32;
            let mut high = 0.0f32;

            for i in 0..half {
                let diff = spectrum[i] - prev_spectrum[i];
                if diff > 0.0 {
                    if i < bass_end {
                        bass += diff;
                    } else if i < mid_end {
                        mid += diff;
                    } else {
                        high += diff;
                    }
                }
            }

            flux.bass.push(bass);
            flux.mid.push(mid);
            flux.high.push(high);
        }

        std::mem::swap(&mut prev_spectrum, &mut spectrum);
    }

    flux
}
