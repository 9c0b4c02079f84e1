//! Executor backends and phase drivers for parallel fold operations.
//!
//! ## Purpose
//!
//! This module provides the fork-join execution contract shared by both
//! concurrency backends, and the phase drivers that express the inclusive
//! scan and the reduction as batches of independent per-chunk work items
//! separated by barriers.
//!
//! ## Design notes
//!
//! * **One contract, two backends**: `run_batch` submits independent work
//!   items and blocks until all complete; the thread backend joins spawned
//!   threads, the task-pool backend uses rayon's ordered collect as its
//!   task-wait barrier. Monomorphization keeps backend dispatch out of the
//!   hot loops.
//! * **Disjoint ownership**: the output buffer is allocated once by the
//!   driver; each worker receives an exclusive `&mut` sub-slice, never a
//!   full-buffer handle, so the parallel phases need no locks.
//! * **One serialization point**: carry propagation is O(W) and runs on the
//!   controlling thread between the two barriers of the scan.
//!
//! ## Invariants
//!
//! * `run_batch` returns results in work-item submission order.
//! * No phase-2 item starts before every phase-1 item has completed.
//! * A panicking worker aborts the whole operation; the output buffer is
//!   dropped, so partial results are never observable.
//!
//! ## Non-goals
//!
//! * No work stealing across chunks, no cancellation, no timeouts: a
//!   stalled worker stalls the operation, which is bounded and synchronous
//!   top to bottom.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use std::ops::Mul;
use std::panic;
use std::thread;

// Internal dependencies
use crate::math::element::FoldElement;
use crate::math::kernels;
use crate::math::partition;

// ============================================================================
// Executor Contract
// ============================================================================

/// Fork-join execution of a batch of independent work items.
///
/// Submitting a batch and waiting for all results is the bulk-synchronous
/// barrier: `run_batch` does not return until every item has completed, and
/// results come back in submission order.
pub trait Executor {
    /// Run every work item to completion and collect the results in order.
    fn run_batch<'env, I, R, F>(&self, items: Vec<I>, work: F) -> Vec<R>
    where
        I: Send + 'env,
        R: Send + 'env,
        F: Fn(I) -> R + Send + Sync + 'env;
}

// ============================================================================
// Thread Backend
// ============================================================================

/// Manual fork-join backend: one OS thread per work item.
///
/// Threads are spawned inside a scope and joined in submission order; the
/// join-all is the phase barrier. A worker panic is re-raised on the
/// controlling thread once the scope has joined the remaining workers.
pub struct ThreadExecutor;

impl Executor for ThreadExecutor {
    fn run_batch<'env, I, R, F>(&self, items: Vec<I>, work: F) -> Vec<R>
    where
        I: Send + 'env,
        R: Send + 'env,
        F: Fn(I) -> R + Send + Sync + 'env,
    {
        thread::scope(|scope| {
            let work = &work;
            let handles: Vec<_> = items
                .into_iter()
                .map(|item| scope.spawn(move || work(item)))
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(payload) => panic::resume_unwind(payload),
                })
                .collect()
        })
    }
}

// ============================================================================
// Task-Pool Backend
// ============================================================================

/// Cooperative task-pool backend: one rayon task per work item.
///
/// The controlling context declares the whole batch inside a single
/// parallel region; the ordered `collect` is the task-wait barrier.
#[cfg(feature = "cpu")]
pub struct TaskPoolExecutor;

#[cfg(feature = "cpu")]
impl Executor for TaskPoolExecutor {
    fn run_batch<'env, I, R, F>(&self, items: Vec<I>, work: F) -> Vec<R>
    where
        I: Send + 'env,
        R: Send + 'env,
        F: Fn(I) -> R + Send + Sync + 'env,
    {
        items.into_par_iter().map(work).collect()
    }
}

// ============================================================================
// Phase Drivers
// ============================================================================

/// Parallel inclusive scan over `input`, returning a new output sequence.
///
/// Two bulk-synchronous phases: per-chunk local scans, then per-chunk carry
/// adjustment, with the sequential exclusive carry propagation between the
/// barriers. Chunk 0 needs no adjustment (its carry is the identity).
///
/// Floating-point summation order follows the chunk structure, so float
/// results may differ across worker counts within rounding; for a fixed
/// worker count both backends compute the identical expression tree.
pub fn scan_pass<T, E>(executor: &E, input: &[T], workers: Option<usize>) -> Vec<T>
where
    T: FoldElement,
    E: Executor,
{
    let n = input.len();
    if n == 0 {
        return Vec::new();
    }

    let workers = partition::resolve_workers(workers, n);
    let size = partition::chunk_size(n, workers);
    let chunks = partition::chunks(n, workers);
    let mut output = vec![T::zero(); n];

    // Phase 1: local inclusive scans, one work item per chunk. Each worker
    // owns exactly one output sub-slice for the duration of the phase.
    let items: Vec<(&[T], &mut [T])> = chunks
        .iter()
        .map(|chunk| &input[chunk.range()])
        .zip(output.chunks_mut(size))
        .collect();
    let partials = executor.run_batch(items, |(chunk_in, chunk_out)| {
        kernels::scan_chunk(chunk_in, chunk_out)
    });

    // Carry propagation: must complete before any adjustment starts.
    let carries = kernels::exclusive_carries(&partials);

    // Phase 2: add each chunk's carry across its sub-slice; chunk 0 skipped.
    let items: Vec<(&mut [T], T)> = output
        .chunks_mut(size)
        .zip(carries)
        .skip(1)
        .collect();
    executor.run_batch(items, |(chunk_out, carry)| {
        kernels::add_carry(chunk_out, carry)
    });

    output
}

/// Parallel reduction (inner product) of two equal-length sequences.
///
/// One bulk-synchronous phase of per-chunk partial dot products, followed by
/// a sequential combine of the W partials on the controlling thread.
pub fn reduce_pass<T, E>(executor: &E, a: &[T], b: &[T], workers: Option<usize>) -> T
where
    T: FoldElement + Mul<Output = T>,
    E: Executor,
{
    debug_assert_eq!(a.len(), b.len());

    let n = a.len();
    if n == 0 {
        return T::zero();
    }

    let workers = partition::resolve_workers(workers, n);
    let chunks = partition::chunks(n, workers);

    let items: Vec<(&[T], &[T])> = chunks
        .iter()
        .map(|chunk| (&a[chunk.range()], &b[chunk.range()]))
        .collect();
    let partials = executor.run_batch(items, |(chunk_a, chunk_b)| {
        kernels::dot_chunk(chunk_a, chunk_b)
    });

    partials.into_iter().fold(T::zero(), |acc, partial| acc + partial)
}
