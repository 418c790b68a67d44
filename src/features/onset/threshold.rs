//! Adaptive onset thresholding
//!
//! A moving-average threshold over the full-spectrum flux: each entry is the
//! local mean over a symmetric window, scaled by the sensitivity multiplier.
//! The window half-width is derived from the hop so that it always spans
//! roughly half a second of audio regardless of frame geometry (about 43
//! frames at 44.1 kHz with hop 512).

/// Time span covered by one side of the averaging window, in seconds
const WINDOW_HALF_SECONDS: f32 = 0.5;

/// Half-width in frames of the adaptive threshold window
pub fn threshold_half_width(sample_rate: u32, hop_size: usize) -> usize {
    ((WINDOW_HALF_SECONDS * sample_rate as f32) / hop_size as f32).round() as usize
}

/// Compute the adaptive threshold sequence for a flux signal
///
/// Each entry is `mean(flux[i-half_width ..= i+half_width]) * multiplier`,
/// with the window clamped at the signal edges. Same length as `flux`.
pub fn adaptive_threshold(flux: &[f32], half_width: usize, multiplier: f32) -> Vec<f32> {
    let mut threshold = Vec::with_capacity(flux.len());

    for i in 0..flux.len() {
        let start = i.saturating_sub(half_width);
        let end = (i + half_width + 1).min(flux.len());
        let sum: f32 = flux[start..end].iter().sum();
        threshold.push(sum / (end - start) as f32 * multiplier);
    }

    threshold
}
