//! Error types for chart derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from chart derivation entry points.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Caller-supplied data failed validation.
    InvalidInput(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for ChartError {}
