//! Layer 2: Math
//!
//! ## Purpose
//!
//! This layer provides the sequential building blocks of the parallel
//! algorithms: the numeric element capability, the chunk partitioner, and
//! the per-chunk kernels that each worker runs over its own sub-range.
//!
//! ## Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Numeric capability required of sequence elements.
pub mod element;

/// Sequential per-chunk kernels and carry propagation.
pub mod kernels;

/// Contiguous chunk partitioning of index ranges.
pub mod partition;
