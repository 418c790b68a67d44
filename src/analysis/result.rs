//! Analysis result types

use serde::{Deserialize, Serialize};

/// Outcome of one full analysis pass
///
/// `beats` is either the raw onset list or the phase-aligned grid subset,
/// depending on the sensitivity configuration. Consumers must treat `bpm` as
/// possibly 0 ("no reliable tempo") and fall back to raw onset spacing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Beat timestamps in seconds, strictly ascending
    pub beats: Vec<f64>,

    /// Estimated tempo in BPM; 0.0 when no reliable tempo was found
    pub bpm: f64,
}

impl Analysis {
    /// Empty result for input too short or too quiet to analyze
    pub fn empty() -> Self {
        Self::default()
    }
}
