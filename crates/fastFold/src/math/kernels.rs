//! Sequential per-chunk kernels and carry propagation.
//!
//! ## Purpose
//!
//! These are the single-threaded routines each worker runs over its own
//! chunk, plus the O(W) carry propagation that stitches the per-chunk scan
//! results together. None of them synchronize: a worker writes only the
//! output sub-slice it exclusively owns.

use std::ops::Mul;

use crate::math::element::FoldElement;

/// Inclusive scan of one chunk.
///
/// Writes `output[0] = input[0]` and `output[i] = output[i - 1] + input[i]`,
/// then returns the chunk's final accumulated value, which becomes the
/// chunk's partial result for carry propagation.
pub fn scan_chunk<T: FoldElement>(input: &[T], output: &mut [T]) -> T {
    debug_assert_eq!(input.len(), output.len());
    debug_assert!(!input.is_empty());

    output[0] = input[0];
    for i in 1..input.len() {
        output[i] = output[i - 1] + input[i];
    }
    output[input.len() - 1]
}

/// Exclusive prefix sum of the per-chunk partial results.
///
/// `carries[0]` is the additive identity; `carries[i]` is the sum of all
/// partials before chunk `i`. Strictly sequential: every carry depends on
/// every earlier partial, so this runs between the two phase barriers on a
/// single thread.
pub fn exclusive_carries<T: FoldElement>(partials: &[T]) -> Vec<T> {
    let mut carries = Vec::with_capacity(partials.len());
    let mut running = T::zero();
    for &partial in partials {
        carries.push(running);
        running = running + partial;
    }
    carries
}

/// Add a chunk's carry to every element of its output sub-slice.
pub fn add_carry<T: FoldElement>(output: &mut [T], carry: T) {
    for value in output.iter_mut() {
        *value = *value + carry;
    }
}

/// Partial inner product of one chunk, accumulated from the additive
/// identity in the element's own type.
pub fn dot_chunk<T>(a: &[T], b: &[T]) -> T
where
    T: FoldElement + Mul<Output = T>,
{
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}
