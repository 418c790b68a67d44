//! Phase-aligned beat grid
//!
//! Given an estimated BPM and the raw onsets, searches for the global phase
//! offset that best aligns a fixed-interval grid with the music, then emits
//! only the grid points that have a real onset nearby. Unsupported points are
//! dropped, not invented: a grid position with no spectral evidence would
//! place a gameplay event on silence.

/// Phase offsets searched within one beat interval
const PHASE_STEPS: usize = 64;

/// Snap window as a fraction of the beat interval
const SNAP_WINDOW_FRACTION: f64 = 0.4;

/// Build a phase-aligned beat grid snapped to the detected onsets
///
/// Searches 64 evenly spaced offsets within one interval,
/// scoring each candidate grid against the onset-strength signal when one is
/// supplied (sampling it at each grid point), or against the raw onsets with
/// a distance-weighted match otherwise - so the grid can be reused for
/// pure-onset snapping without spectral data. The grid runs from the first
/// onset to the last; only points within `0.4 * interval` of some onset
/// survive.
///
/// # Arguments
///
/// * `onsets` - Raw onset times in seconds, ascending
/// * `strength` - Optional onset-strength signal indexed per frame transition
/// * `bpm` - Estimated tempo; non-positive values return the onsets verbatim
/// * `hop_seconds` - Frame hop duration used to index `strength`
///
/// # Returns
///
/// Beat times in seconds, ascending; possibly shorter than the naive grid.
pub fn build_aligned_grid(
    onsets: &[f64],
    strength: Option<&[f32]>,
    bpm: f64,
    hop_seconds: f64,
) -> Vec<f64> {
    if onsets.is_empty() {
        return Vec::new();
    }
    if bpm <= 0.0 {
        // No tempo, no grid: raw onsets are the best available beats
        return onsets.to_vec();
    }

    let interval = 60.0 / bpm;
    let snap_window = interval * SNAP_WINDOW_FRACTION;
    let first = onsets[0];
    let last = *onsets.last().unwrap();

    // Phase search: strictly-greater comparison keeps the earliest best
    // offset for reproducibility
    let mut best_offset = 0.0f64;
    let mut best_score = f64::NEG_INFINITY;

    for step in 0..PHASE_STEPS {
        let offset = step as f64 / PHASE_STEPS as f64 * interval;
        let mut score = 0.0f64;

        let mut t = first + offset;
        while t <= last + 1e-9 {
            score += match strength {
                Some(signal) => {
                    let idx = (t / hop_seconds).round() as usize;
                    if idx < signal.len() {
                        signal[idx] as f64
                    } else {
                        0.0
                    }
                }
                None => {
                    let distance = nearest_onset_distance(onsets, t);
                    (1.0 - distance / snap_window).max(0.0)
                }
            };
            t += interval;
        }

        if score > best_score {
            best_score = score;
            best_offset = offset;
        }
    }

    // Emit the grid at the winning phase, keeping only supported points
    let mut beats = Vec::new();
    let mut t = first + best_offset;
    while t <= last + 1e-9 {
        if nearest_onset_distance(onsets, t) <= snap_window {
            beats.push(t);
        }
        t += interval;
    }

    log::debug!(
        "Aligned grid: {:.2} BPM, offset {:.3}s, {} beats kept from {} onsets",
        bpm,
        best_offset,
        beats.len(),
        onsets.len()
    );

    beats
}

/// Distance from `t` to the nearest onset (onsets ascending)
fn nearest_onset_distance(onsets: &[f64], t: f64) -> f64 {
    let idx = onsets.partition_point(|&o| o < t);
    let after = onsets.get(idx).map(|&o| (o - t).abs());
    let before = idx.checked_sub(1).and_then(|i| onsets.get(i)).map(|&o| (t - o).abs());

    match (before, after) {
        (Some(b), Some(a)) => b.min(a),
        (Some(b), None) => b,
        (None, Some(a)) => a,
        (None, None) => f64::INFINITY,
    }
}
