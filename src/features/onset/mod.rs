//! Onset detection
//!
//! Combines the per-band flux into a full-spectrum detection signal, applies
//! an adaptive moving-average threshold and picks debounced local maxima.

pub mod flux;
pub mod peaks;
pub mod threshold;

/// Detect onset timestamps from a full-spectrum flux sequence
///
/// Convenience wrapper chaining [`threshold::adaptive_threshold`] (with the
/// hop-scaled window from [`threshold::threshold_half_width`]) and
/// [`peaks::pick_onsets`].
///
/// # Arguments
///
/// * `full_flux` - Full-spectrum flux, one entry per frame transition
/// * `sample_rate` - Sample rate in Hz
/// * `hop_size` - Hop size used to build the flux
/// * `threshold_multiplier` - Sensitivity multiplier (higher = fewer onsets)
/// * `min_peak_interval` - Onset debounce gap in seconds
///
/// # Returns
///
/// Onset times in seconds, strictly increasing; empty when the flux carries
/// no peaks above threshold.
pub fn detect_onsets(
    full_flux: &[f32],
    sample_rate: u32,
    hop_size: usize,
    threshold_multiplier: f32,
    min_peak_interval: f32,
) -> Vec<f64> {
    let half_width = threshold::threshold_half_width(sample_rate, hop_size);
    let thresholds = threshold::adaptive_threshold(full_flux, half_width, threshold_multiplier);
    peaks::pick_onsets(
        full_flux,
        &thresholds,
        sample_rate,
        hop_size,
        min_peak_interval,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_onsets_silence() {
        let flux = vec![0.0f32; 500];
        let onsets = detect_onsets(&flux, 44100, 512, 1.8, 0.15);
        assert!(onsets.is_empty());
    }

    #[test]
    fn test_detect_onsets_isolated_spikes() {
        let mut flux = vec![0.01f32; 500];
        for i in (50..450).step_by(43) {
            flux[i] = 2.0;
        }
        let onsets = detect_onsets(&flux, 44100, 512, 1.8, 0.15);

        assert!(onsets.len() >= 5, "Expected several onsets, got {}", onsets.len());
        for pair in onsets.windows(2) {
            assert!(pair[1] - pair[0] >= 0.15);
        }
    }
}
