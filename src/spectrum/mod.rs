//! Spectral front end
//!
//! The transform kernel and the framed analyzer that turns raw samples into
//! per-band spectral flux sequences. This is the dominant cost center of the
//! engine: O(num_frames * fft_size * log(fft_size)).

pub mod fft;
pub mod stft;
