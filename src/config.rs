//! Configuration parameters for beat analysis
//!
//! The frame constants below are part of the engine contract: downstream
//! consumers compare beat timestamps across tracks, so the frame geometry and
//! band edges must stay fixed to keep results comparable.

use serde::{Deserialize, Serialize};

/// FFT size used for framed spectral analysis (power of two, default contract: 2048)
pub const FFT_SIZE: usize = 2048;

/// Hop size between consecutive analysis frames (default contract: 512)
pub const HOP_SIZE: usize = 512;

/// Upper edge of the bass band in Hz (flux below this is "bass")
pub const BASS_EDGE_HZ: f32 = 200.0;

/// Upper edge of the mid band in Hz (flux above this is "high")
pub const MID_EDGE_HZ: f32 = 2000.0;

/// Sensitivity configuration for onset picking and grid alignment
///
/// Supplied per difficulty by the caller. Higher `threshold_multiplier` means
/// fewer onsets; `min_peak_interval` debounces onsets closer than the given
/// gap in seconds; `use_grid` selects between the phase-aligned beat grid and
/// the raw onset list.
///
/// Unrecognized fields in serialized form are ignored and missing fields take
/// their defaults, so partial presets deserialize cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sensitivity {
    /// Multiplier applied to the local mean flux when thresholding (default: 1.8)
    pub threshold_multiplier: f32,

    /// Minimum gap between accepted onsets in seconds (default: 0.15)
    pub min_peak_interval: f32,

    /// Snap beats to the phase-aligned tempo grid (default: true)
    pub use_grid: bool,
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self {
            threshold_multiplier: 1.8,
            min_peak_interval: 0.15,
            use_grid: true,
        }
    }
}

impl Sensitivity {
    /// Easy preset: sparse, conservative beats snapped to the grid
    pub fn easy() -> Self {
        Self {
            threshold_multiplier: 2.2,
            min_peak_interval: 0.3,
            use_grid: true,
        }
    }

    /// Normal preset: the defaults
    pub fn normal() -> Self {
        Self::default()
    }

    /// Hard preset: dense raw onsets, no grid snapping
    pub fn hard() -> Self {
        Self {
            threshold_multiplier: 1.0,
            min_peak_interval: 0.1,
            use_grid: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sensitivity() {
        let s = Sensitivity::default();
        assert!((s.threshold_multiplier - 1.8).abs() < 1e-6);
        assert!((s.min_peak_interval - 0.15).abs() < 1e-6);
        assert!(s.use_grid);
    }

    #[test]
    fn test_presets_ordered_by_density() {
        // Harder difficulties lower the threshold and shorten the debounce
        let easy = Sensitivity::easy();
        let normal = Sensitivity::normal();
        let hard = Sensitivity::hard();

        assert!(easy.threshold_multiplier > normal.threshold_multiplier);
        assert!(normal.threshold_multiplier > hard.threshold_multiplier);
        assert!(easy.min_peak_interval > normal.min_peak_interval);
        assert!(normal.min_peak_interval > hard.min_peak_interval);
        assert!(!hard.use_grid);
    }

    #[test]
    fn test_partial_preset_deserializes_with_defaults() {
        let s: Sensitivity = serde_json::from_str(r#"{"threshold_multiplier": 2.0}"#).unwrap();
        assert!((s.threshold_multiplier - 2.0).abs() < 1e-6);
        assert!((s.min_peak_interval - 0.15).abs() < 1e-6);
        assert!(s.use_grid);
    }

    #[test]
    fn test_fft_size_is_power_of_two() {
        assert!(FFT_SIZE.is_power_of_two());
        assert!(HOP_SIZE < FFT_SIZE);
    }
}
