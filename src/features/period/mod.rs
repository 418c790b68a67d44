//! Tempo estimation
//!
//! The primary path shapes the rhythm flux into an onset-strength signal and
//! scores BPM hypotheses with a multi-phase comb (`strength` + `comb` +
//! `octave`). The interval-histogram estimator in `intervals` is the explicit
//! fallback for onset-only callers and is never mixed with the comb method.

pub mod comb;
pub mod intervals;
pub mod octave;
pub mod strength;
