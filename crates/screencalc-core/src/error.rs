//! Error types for geometry computations.

use std::fmt;

/// Error type for geometry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Aspect ratio given as a slice with other than exactly two elements.
    InvalidRatio {
        /// Number of elements actually supplied.
        len: usize,
    },
    /// Square root or division over a non-positive or undefined input.
    Domain(&'static str),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRatio { len } => {
                write!(f, "aspect ratio pair must have exactly 2 elements (got {len})")
            }
            Self::Domain(what) => write!(f, "domain error: {what}"),
        }
    }
}

impl std::error::Error for GeometryError {}
