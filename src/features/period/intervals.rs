//! Interval-histogram tempo estimation
//!
//! A coarse estimator over inter-onset intervals, kept as the explicit
//! fallback for callers without spectral data (and for buffers too short to
//! build a usable onset-strength signal). Each interval is folded by integer
//! multiples and divisions into the 60-200 BPM range and voted into 2-BPM
//! bins; the fullest bin wins. Markedly less accurate than the comb
//! estimator, which is why the two are never mixed: the pipeline uses the
//! comb method whenever strength data exists.

/// Histogram bin width in BPM
const BIN_BPM: f64 = 2.0;

/// Lowest BPM the histogram covers
const MIN_BPM: f64 = 60.0;

/// Highest BPM the histogram covers
const MAX_BPM: f64 = 200.0;

/// Largest integer fold applied when mapping an interval into range
const MAX_FOLD: u32 = 4;

/// Estimate BPM from raw onset times via an interval histogram
///
/// # Arguments
///
/// * `onsets` - Onset times in seconds, ascending
///
/// # Returns
///
/// The center of the fullest histogram bin. When no interval folds into the
/// 60-200 BPM range at all, falls back to the median inter-onset interval so
/// perfectly arrhythmic (or extremely slow) input still yields a usable
/// number rather than a meaningless peak. Fewer than two onsets yield 0.0.
pub fn estimate_bpm_from_intervals(onsets: &[f64]) -> f64 {
    if onsets.len() < 2 {
        return 0.0;
    }

    let intervals: Vec<f64> = onsets.windows(2).map(|w| w[1] - w[0]).collect();

    let num_bins = ((MAX_BPM - MIN_BPM) / BIN_BPM).ceil() as usize;
    let mut bins = vec![0u32; num_bins];

    for &interval in &intervals {
        if interval <= 0.0 {
            continue;
        }
        let bpm = 60.0 / interval;

        // Fold the implied tempo by integer multiples and divisions until a
        // candidate lands in the typical range
        for fold in 1..=MAX_FOLD {
            for candidate in [bpm / fold as f64, bpm * fold as f64] {
                if (MIN_BPM..=MAX_BPM).contains(&candidate) {
                    let bin = ((candidate - MIN_BPM) / BIN_BPM) as usize;
                    if bin < num_bins {
                        bins[bin] += 1;
                    }
                }
            }
        }
    }

    // Fullest bin, earliest wins ties
    let mut best_bin = 0usize;
    for i in 1..num_bins {
        if bins[i] > bins[best_bin] {
            best_bin = i;
        }
    }

    if bins[best_bin] == 0 {
        // Degenerate histogram: fall back to the median interval
        let mut sorted = intervals;
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let median = sorted[sorted.len() / 2];
        return if median > 0.0 { 60.0 / median } else { 0.0 };
    }

    MIN_BPM + (best_bin as f64 + 0.5) * BIN_BPM
}
