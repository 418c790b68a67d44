//! Error types for the beat analysis engine

use std::fmt;

/// Errors that can occur during beat analysis
///
/// Data-dependent shortfalls (silence, buffers too short to frame, too few
/// onsets for tempo scoring) are not errors: every stage degrades to an empty
/// or zero result so the caller can decide how to present "no beat found".
/// The variants here cover caller contract violations only.
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
