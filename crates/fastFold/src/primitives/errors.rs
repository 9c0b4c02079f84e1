//! Error types for fold operations.
//!
//! All validation happens before any worker is spawned, so an `Err` return
//! guarantees that no partial computation was performed.

use thiserror::Error;

/// Errors that can occur while configuring or running a fold operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    /// The two input sequences of a reduction differ in length.
    #[error("input lengths do not match: left has {left} elements, right has {right}")]
    MismatchedInputs {
        /// Length of the first input.
        left: usize,
        /// Length of the second input.
        right: usize,
    },

    /// The input cannot be viewed as a contiguous slice.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The selected backend cannot provide a required capability.
    #[error("{feature} is not supported by the {backend} backend")]
    UnsupportedFeature {
        /// Name of the selected backend.
        backend: &'static str,
        /// The capability that is unavailable.
        feature: &'static str,
    },
}
