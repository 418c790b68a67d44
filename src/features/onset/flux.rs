//! Band flux combination
//!
//! Linearly blends the three band-flux streams into purpose-specific
//! detection signals. Two presets exist: a bass-dominant blend that tracks
//! the rhythmic pulse for tempo scoring, and a balanced, bass-leaning blend
//! for picking individual onsets. The weights are empirically tuned; keep the
//! bass-dominance-for-tempo / balance-for-onsets relationship when adjusting.

use crate::spectrum::stft::BandFlux;

/// Weights applied to the (bass, mid, high) flux streams
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxWeights {
    /// Weight for flux below 200 Hz
    pub bass: f32,
    /// Weight for flux in 200-2000 Hz
    pub mid: f32,
    /// Weight for flux above 2000 Hz
    pub high: f32,
}

/// Bass-dominant preset used for tempo tracking
pub const RHYTHM_WEIGHTS: FluxWeights = FluxWeights {
    bass: 3.0,
    mid: 0.3,
    high: 0.1,
};

/// Balanced, bass-leaning preset used for onset picking
pub const ONSET_WEIGHTS: FluxWeights = FluxWeights {
    bass: 1.5,
    mid: 1.5,
    high: 0.3,
};

/// Combine per-band flux into a single weighted sequence
///
/// `combined[i] = bass[i]*w.bass + mid[i]*w.mid + high[i]*w.high`, same
/// length as the inputs.
pub fn combine_flux(bands: &BandFlux, weights: FluxWeights) -> Vec<f32> {
    bands
        .bass
        .iter()
        .zip(&bands.mid)
        .zip(&bands.high)
        .map(|((b, m), h)| b * weights.bass + m * weights.mid + h * weights.high)
        .collect()
}
