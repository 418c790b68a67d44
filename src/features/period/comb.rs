//! Comb-filter tempo estimation
//!
//! Scores a dense set of BPM hypotheses by multi-phase comb alignment against
//! the onset-strength signal, refines the winner with parabolic interpolation
//! and resolves half/double ambiguity via the octave disambiguator.
//!
//! This is effectively autocorrelation via exhaustive period/phase search
//! rather than FFT-based autocorrelation: the tempo range is narrow (60-200
//! BPM), so testing 281 candidates with 8 phases each is cheap and avoids the
//! windowing artifacts of true autocorrelation.
//!
//! Candidate sweep order and the strictly-greater tie-break are part of the
//! contract: reproducible results across platforms depend on them, so do not
//! reorder the search or relax the comparison.

use crate::features::period::octave;

/// Lowest BPM hypothesis tested
pub const MIN_BPM: f64 = 60.0;

/// Highest BPM hypothesis tested
pub const MAX_BPM: f64 = 200.0;

/// Spacing of the BPM hypothesis grid
pub const BPM_STEP: f64 = 0.5;

/// Minimum onset-strength samples required before tempo scoring is attempted
pub const MIN_STRENGTH_SAMPLES: usize = 100;

/// Phase offsets tested per candidate
const NUM_PHASES: usize = 8;

/// Dense candidate score table produced by the sweep
///
/// Indexed by the hypothesis grid (`MIN_BPM + i * BPM_STEP`); the octave
/// disambiguator looks up half/double candidates in it.
#[derive(Debug, Clone)]
pub struct TempoScores {
    scores: Vec<f32>,
}

impl TempoScores {
    pub(crate) fn from_scores(scores: Vec<f32>) -> Self {
        Self { scores }
    }

    /// Score of the hypothesis grid point nearest `bpm`, or `None` when the
    /// value falls outside the swept range
    pub fn score_near(&self, bpm: f64) -> Option<f32> {
        let idx = ((bpm - MIN_BPM) / BPM_STEP).round();
        if idx < 0.0 || idx as usize >= self.scores.len() {
            return None;
        }
        Some(self.scores[idx as usize])
    }
}

/// Estimate the tempo of an onset-strength signal
///
/// Sweeps BPM hypotheses over [`MIN_BPM`, `MAX_BPM`] at [`BPM_STEP`]
/// granularity. Each candidate is scored by the best of 8 phase
/// alignments: the mean of the strength values sampled every period starting
/// at the phase offset, with positions rounded to the nearest frame and
/// out-of-range samples skipped. The winning candidate is refined by
/// parabolic interpolation across its neighbors and passed through octave
/// disambiguation.
///
/// # Arguments
///
/// * `strength` - Onset-strength signal, one entry per frame transition
/// * `hop_seconds` - Frame hop duration (`hop_size / sample_rate`)
///
/// # Returns
///
/// Estimated BPM, or 0.0 when the signal is shorter than
/// [`MIN_STRENGTH_SAMPLES`] or accumulates no score at all (insufficient or
/// arrhythmic data; never an error).
pub fn estimate_tempo(strength: &[f32], hop_seconds: f64) -> f64 {
    if strength.len() < MIN_STRENGTH_SAMPLES {
        log::debug!(
            "Onset-strength signal too short for tempo scoring ({} < {})",
            strength.len(),
            MIN_STRENGTH_SAMPLES
        );
        return 0.0;
    }

    let num_candidates = ((MAX_BPM - MIN_BPM) / BPM_STEP) as usize + 1;
    let mut scores = Vec::with_capacity(num_candidates);

    for i in 0..num_candidates {
        let bpm = MIN_BPM + i as f64 * BPM_STEP;
        let period = 60.0 / bpm / hop_seconds;
        scores.push(best_phase_score(strength, period));
    }

    // Global best, strictly greater so the earliest candidate wins ties
    let mut best_idx = 0usize;
    let mut best_score = 0.0f32;
    for (i, &score) in scores.iter().enumerate() {
        if score > best_score {
            best_score = score;
            best_idx = i;
        }
    }

    if best_score <= 0.0 {
        log::debug!("No tempo hypothesis accumulated any score");
        return 0.0;
    }

    let mut bpm = MIN_BPM + best_idx as f64 * BPM_STEP;

    // Parabolic refinement across the winning candidate and its neighbors
    // recovers sub-step precision from the discrete grid
    if best_idx > 0 && best_idx < scores.len() - 1 {
        let a = scores[best_idx - 1] as f64;
        let b = scores[best_idx] as f64;
        let c = scores[best_idx + 1] as f64;
        let curvature = a - 2.0 * b + c;
        if curvature.abs() > 1e-9 {
            let offset = 0.5 * (a - c) / curvature;
            if offset.abs() < 1.0 {
                bpm += offset * BPM_STEP;
            }
        }
    }

    let table = TempoScores::from_scores(scores);
    let resolved = octave::disambiguate(bpm, best_score, &table);

    log::debug!(
        "Tempo estimate: {:.2} BPM (score {:.4}, refined from grid, octave-resolved from {:.2})",
        resolved,
        best_score,
        bpm
    );

    resolved
}

/// Best score over the tested phase offsets for one period hypothesis
fn best_phase_score(strength: &[f32], period: f64) -> f32 {
    let mut best = 0.0f32;

    for p in 0..NUM_PHASES {
        let mut pos = p as f64 / NUM_PHASES as f64 * period;
        let mut sum = 0.0f32;
        let mut count = 0usize;

        loop {
            let idx = pos.round() as usize;
            if idx >= strength.len() {
                break;
            }
            sum += strength[idx];
            count += 1;
            pos += period;
        }

        if count > 0 {
            let score = sum / count as f32;
            if score > best {
                best = score;
            }
        }
    }

    best
}
