//! Feature extraction modules
//!
//! - `onset`: flux combination, adaptive thresholding and peak picking
//! - `period`: onset-strength shaping and tempo estimation
//! - `beat_tracking`: phase-aligned beat grid construction

pub mod beat_tracking;
pub mod onset;
pub mod period;
