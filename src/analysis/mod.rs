//! Analysis result types

pub mod result;
