//! Concurrency backend selection.
//!
//! Both backends run the same two-phase algorithm and produce identical
//! results for the same input and worker count; they differ only in how the
//! per-chunk work units are scheduled.

/// Execution backend for the parallel phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// One OS thread per chunk, joined at each phase barrier.
    Threads,
    /// Cooperative task pool: one task per chunk inside a single parallel
    /// region, with a task-wait barrier between phases. Requires the `cpu`
    /// feature.
    TaskPool,
}

impl Default for Backend {
    fn default() -> Self {
        #[cfg(feature = "cpu")]
        {
            Backend::TaskPool
        }
        #[cfg(not(feature = "cpu"))]
        {
            Backend::Threads
        }
    }
}
