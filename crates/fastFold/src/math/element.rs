//! Numeric capability required of sequence elements.
//!
//! ## Purpose
//!
//! The scan and reduction algorithms need exactly three things from an
//! element type: addition, an additive identity, and (for reduction only)
//! multiplication. This module names that narrow capability as a trait so
//! the algorithms work for integer and float element types alike.
//!
//! ## Design notes
//!
//! * **Narrow by intent**: no ordering, no division, no float-only methods.
//! * **Blanket impl**: any `Copy + Send + Sync` type with a `num_traits`
//!   additive identity qualifies automatically.
//! * **Multiplication**: demanded only by `reduce`, as a per-method bound,
//!   so scan stays usable for types without `Mul`.

use num_traits::Zero;
use std::ops::Add;

/// Element capability for fold operations.
///
/// `Zero` supplies both the additive identity and `Add`; `Copy` keeps the
/// kernels free of clones; `Send + Sync` lets elements cross worker
/// boundaries.
pub trait FoldElement: Copy + Send + Sync + Zero + Add<Output = Self> {}

impl<T> FoldElement for T where T: Copy + Send + Sync + Zero + Add<Output = Self> {}
