//! Input abstractions for fold operations.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction over input containers,
//! allowing `scan` and `reduce` to accept slices, vectors, and ndarray
//! arrays through a single seam.
//!
//! ## Design notes
//!
//! * **Zero-copy**: inputs expose a direct slice view of their buffer.
//! * **Fail-fast validation**: non-contiguous ndarray inputs are rejected
//!   before any worker spawns.
//!
//! ## Invariants
//!
//! * Returned slices represent every element of the input container.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an
//!   error.
//!
//! ## Non-goals
//!
//! * This module does not copy, clean, or reshape data.

// Feature-gated imports
#[cfg(feature = "cpu")]
use ndarray::{ArrayBase, Data, Ix1};

// Internal dependencies
use crate::math::element::FoldElement;
use crate::primitives::errors::FoldError;

/// Trait for types that can be used as input for fold operations.
pub trait FoldInput<T: FoldElement> {
    /// Convert the input to a contiguous slice.
    fn as_fold_slice(&self) -> Result<&[T], FoldError>;
}

impl<T: FoldElement> FoldInput<T> for [T] {
    fn as_fold_slice(&self) -> Result<&[T], FoldError> {
        Ok(self)
    }
}

impl<T: FoldElement> FoldInput<T> for Vec<T> {
    fn as_fold_slice(&self) -> Result<&[T], FoldError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "cpu")]
impl<T: FoldElement, S> FoldInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_fold_slice(&self) -> Result<&[T], FoldError> {
        self.as_slice().ok_or_else(|| {
            FoldError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
