//! High-level API for parallel fold operations.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring the worker count and concurrency
//! backend, producing a reusable processor that runs the two operations:
//! inclusive prefix scan and reduction (inner product).
//!
//! ## Design notes
//!
//! * **Ergonomic**: fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: configuration is checked when `.build()` is called;
//!   input lengths are checked before any worker spawns.
//! * **Type-safe**: generic over any [`FoldElement`] type, integer or float.
//!
//! ## Key concepts
//!
//! * **Worker count**: defaults to the available hardware parallelism,
//!   clamped to `[1, len]` per invocation.
//! * **Backend**: `Threads` (manual fork-join) or `TaskPool` (cooperative
//!   tasks); both produce identical results for the same configuration.
//!
//! ### Configuration flow
//!
//! 1. Create a [`FoldBuilder`] via `Fold::new()`.
//! 2. Chain configuration methods (`.workers()`, `.backend()`).
//! 3. Call `.build()` to obtain a [`ParallelFold`] processor.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::TaskPoolExecutor;

// External dependencies
use std::ops::Mul;

// Internal dependencies
use crate::engine::executor::{reduce_pass, scan_pass, ThreadExecutor};
use crate::input::FoldInput;
use crate::math::element::FoldElement;
use crate::primitives::backend::Backend;
use crate::primitives::errors::FoldError;

// ============================================================================
// Entry Point
// ============================================================================

/// Entry point for configuring fold operations.
#[derive(Debug, Clone, Copy)]
pub struct Fold;

impl Fold {
    /// Create a new builder with default parameters.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> FoldBuilder {
        FoldBuilder::default()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for a [`ParallelFold`] processor.
#[derive(Debug, Clone, Default)]
pub struct FoldBuilder {
    workers: Option<usize>,
    backend: Option<Backend>,
}

impl FoldBuilder {
    /// Set the requested worker count.
    ///
    /// Defaults to the available hardware parallelism. A request of 0 is
    /// clamped to 1, and a request exceeding the sequence length is clamped
    /// to the length, so no worker ever receives an empty range.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set the concurrency backend.
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Build the processor, validating the configuration.
    pub fn build(self) -> Result<ParallelFold, FoldError> {
        let backend = self.backend.unwrap_or_default();

        #[cfg(not(feature = "cpu"))]
        if backend == Backend::TaskPool {
            return Err(FoldError::UnsupportedFeature {
                backend: "TaskPool",
                feature: "cooperative task execution (enable the `cpu` feature)",
            });
        }

        Ok(ParallelFold {
            workers: self.workers,
            backend,
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Reusable processor for parallel fold operations.
pub struct ParallelFold {
    workers: Option<usize>,
    backend: Backend,
}

impl ParallelFold {
    /// Inclusive prefix sum of `input`, returned as a new sequence of the
    /// same length.
    ///
    /// A zero-length input returns an empty sequence without spawning
    /// workers. Floating-point summation order follows the chunk structure,
    /// so float results may differ across worker counts within rounding;
    /// integer results are exact regardless.
    pub fn scan<T, I>(&self, input: &I) -> Result<Vec<T>, FoldError>
    where
        T: FoldElement,
        I: FoldInput<T> + ?Sized,
    {
        let input = input.as_fold_slice()?;

        match self.backend {
            Backend::Threads => Ok(scan_pass(&ThreadExecutor, input, self.workers)),
            #[cfg(feature = "cpu")]
            Backend::TaskPool => Ok(scan_pass(&TaskPoolExecutor, input, self.workers)),
            #[cfg(not(feature = "cpu"))]
            Backend::TaskPool => Err(FoldError::UnsupportedFeature {
                backend: "TaskPool",
                feature: "cooperative task execution (enable the `cpu` feature)",
            }),
        }
    }

    /// Sum of elementwise products of `a` and `b` (inner product).
    ///
    /// Fails with [`FoldError::MismatchedInputs`] before any worker spawns
    /// if the lengths differ. Zero-length inputs return the additive
    /// identity.
    pub fn reduce<T, I1, I2>(&self, a: &I1, b: &I2) -> Result<T, FoldError>
    where
        T: FoldElement + Mul<Output = T>,
        I1: FoldInput<T> + ?Sized,
        I2: FoldInput<T> + ?Sized,
    {
        let a = a.as_fold_slice()?;
        let b = b.as_fold_slice()?;

        if a.len() != b.len() {
            return Err(FoldError::MismatchedInputs {
                left: a.len(),
                right: b.len(),
            });
        }

        match self.backend {
            Backend::Threads => Ok(reduce_pass(&ThreadExecutor, a, b, self.workers)),
            #[cfg(feature = "cpu")]
            Backend::TaskPool => Ok(reduce_pass(&TaskPoolExecutor, a, b, self.workers)),
            #[cfg(not(feature = "cpu"))]
            Backend::TaskPool => Err(FoldError::UnsupportedFeature {
                backend: "TaskPool",
                feature: "cooperative task execution (enable the `cpu` feature)",
            }),
        }
    }
}
