//! Error types for text inference.

use thiserror::Error;

/// Errors raised while extracting display parameters from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// A resolution-like span was found but could not be decomposed into
    /// two numeric groups.
    #[error("ambiguous resolution token: {span:?}")]
    AmbiguousMatch {
        /// The matched span that failed to decompose.
        span: String,
    },
}
