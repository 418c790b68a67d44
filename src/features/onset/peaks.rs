//! Onset peak picking
//!
//! Converts the thresholded full-spectrum flux into a debounced list of onset
//! timestamps. An index is an onset candidate iff it exceeds its local
//! threshold and is a local maximum; ties on a flat plateau break toward the
//! earlier index via the non-strict right-hand comparison. Edge frames are
//! never evaluated.

/// Pick debounced onset times from a flux sequence and its threshold
///
/// # Arguments
///
/// * `flux` - Full-spectrum flux, one entry per frame transition
/// * `threshold` - Adaptive threshold, same length as `flux`
/// * `sample_rate` - Sample rate in Hz
/// * `hop_size` - Hop size used to build the flux
/// * `min_peak_interval` - Minimum gap between accepted onsets in seconds
///
/// # Returns
///
/// Onset times in seconds, strictly increasing.
///
/// # Panics
///
/// Panics if `flux` and `threshold` differ in length (caller contract
/// violation).
pub fn pick_onsets(
    flux: &[f32],
    threshold: &[f32],
    sample_rate: u32,
    hop_size: usize,
    min_peak_interval: f32,
) -> Vec<f64> {
    assert_eq!(
        flux.len(),
        threshold.len(),
        "flux and threshold must have equal length"
    );

    let mut onsets: Vec<f64> = Vec::new();
    let hop_seconds = hop_size as f64 / sample_rate as f64;

    if flux.len() < 3 {
        return onsets;
    }

    for i in 1..flux.len() - 1 {
        if flux[i] > threshold[i] && flux[i] > flux[i - 1] && flux[i] >= flux[i + 1] {
            let time = i as f64 * hop_seconds;
            let accepted = match onsets.last() {
                Some(&last) => time - last >= min_peak_interval as f64,
                None => true,
            };
            if accepted {
                onsets.push(time);
            }
        }
    }

    log::debug!(
        "Picked {} onsets from {} flux frames (min interval {:.3}s)",
        onsets.len(),
        flux.len(),
        min_peak_interval
    );

    onsets
}
