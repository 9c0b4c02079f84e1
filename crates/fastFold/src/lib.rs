//! Parallel inclusive scan and reduction primitives.
//!
//! ## Purpose
//!
//! This crate implements two divide-and-conquer numeric primitives over
//! contiguous sequences, inclusive prefix scan and reduction (inner
//! product), each runnable against two interchangeable fork-join
//! backends: manual OS threads and a cooperative task pool.
//!
//! ## Design notes
//!
//! * **Static partition**: the input is split once into ceiling-sized,
//!   disjoint chunks; each worker exclusively owns one output sub-range,
//!   so the parallel phases are lock-free.
//! * **Bulk-synchronous phases**: scan runs local-compute, a sequential
//!   carry propagation, then a parallel adjustment; reduction runs
//!   local-compute then a sequential combine. Workers only synchronize at
//!   phase barriers.
//! * **Backend-agnostic**: both backends run the identical algorithm
//!   through one executor contract and produce identical results for the
//!   same configuration.
//! * **Generics**: operations work for any element type with addition and
//!   an additive identity; reduction additionally requires multiplication.
//!
//! ## Architecture
//!
//! ```text
//! Layer 4: API          fluent builder, input validation
//!   ↓
//! Layer 3: Engine       executor backends, phase drivers
//!   ↓
//! Layer 2: Math         partitioner, per-chunk kernels
//!   ↓
//! Layer 1: Primitives   backend selection, errors
//! ```
//!
//! ## Example
//!
//! ```
//! use fastFold::prelude::*;
//!
//! let data = vec![1u64, 1, 1, 1, 1, 1, 1, 1, 1, 1];
//! let fold = Fold::new().workers(3).build().unwrap();
//!
//! let prefix = fold.scan(&data).unwrap();
//! assert_eq!(prefix, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//!
//! let dot: f64 = fold.reduce(&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]).unwrap();
//! assert_eq!(dot, 32.0);
//! ```

#![allow(non_snake_case)]

pub mod api;
pub mod engine;
pub mod input;
pub mod math;
pub mod primitives;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::api::{Fold, FoldBuilder, ParallelFold};
    #[cfg(feature = "cpu")]
    pub use crate::engine::executor::TaskPoolExecutor;
    pub use crate::engine::executor::{Executor, ThreadExecutor};
    pub use crate::input::FoldInput;
    pub use crate::math::element::FoldElement;
    pub use crate::primitives::backend::Backend;
    pub use crate::primitives::errors::FoldError;
}
