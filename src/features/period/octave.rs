//! Half/double tempo disambiguation
//!
//! Comb scoring is inherently octave-ambiguous: a comb at half the true tempo
//! aligns with every other beat and scores as well as the true rate (think
//! locking onto the snare pattern at half the beat rate). This pass checks the
//! half and double of the selected BPM against the score table and substitutes
//! one of them when it is musically preferable or clearly better. Only a
//! single substitution is performed, no recursive correction.

use crate::features::period::comb::TempoScores;

/// Musically preferred tempo band, lower edge
const PREFERRED_MIN: f64 = 75.0;

/// Musically preferred tempo band, upper edge
const PREFERRED_MAX: f64 = 160.0;

/// Score fraction an in-band octave must reach to replace an out-of-band pick
const PREFERRED_ACCEPT: f32 = 0.75;

/// Score factor an octave must exceed to replace the pick outright
const BETTER_ACCEPT: f32 = 1.05;

fn in_preferred_band(bpm: f64) -> bool {
    (PREFERRED_MIN..=PREFERRED_MAX).contains(&bpm)
}

/// Resolve half/double tempo ambiguity for a selected BPM
///
/// Checks `bpm/2` then `bpm*2` against the candidate score table. An octave
/// replaces the original when either:
///
/// - it lies in the preferred [75, 160] band while the original does not, and
///   scores at least 75% of the original, or
/// - it scores strictly more than 5% better than the original.
///
/// Octaves outside the swept range have no score and are skipped. The first
/// qualifying octave wins; at most one substitution happens.
pub fn disambiguate(bpm: f64, score: f32, table: &TempoScores) -> f64 {
    for candidate in [bpm * 0.5, bpm * 2.0] {
        let Some(candidate_score) = table.score_near(candidate) else {
            continue;
        };

        let preferred_swap = in_preferred_band(candidate)
            && !in_preferred_band(bpm)
            && candidate_score >= PREFERRED_ACCEPT * score;
        let better_swap = candidate_score > BETTER_ACCEPT * score;

        if preferred_swap || better_swap {
            log::debug!(
                "Octave substitution: {:.2} BPM (score {:.4}) -> {:.2} BPM (score {:.4})",
                bpm,
                score,
                candidate,
                candidate_score
            );
            return candidate;
        }
    }

    bpm
}
