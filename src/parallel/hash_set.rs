//! Parallel batch drivers for the hash set operations.
//!
//! The shared operand is a slice here rather than an arbitrary iterable,
//! because every worker needs to walk it independently.

use rayon::prelude::*;

use crate::algebra::hash_set;
use crate::container::NativeHashSet;

/// Applies [`hash_set::except_with`] to every set in `sets`.
#[inline]
pub fn par_except_with<T, S>(sets: &mut [S], other: &[T])
where
    T: Sync,
    S: NativeHashSet<T> + Send,
{
    sets.par_iter_mut()
        .for_each(|target| hash_set::except_with(target, other));
}

/// Applies [`hash_set::union_with`] to every set in `sets`.
#[inline]
pub fn par_union_with<T, S>(sets: &mut [S], other: &[T])
where
    T: Copy + Sync,
    S: NativeHashSet<T> + Send,
{
    sets.par_iter_mut()
        .for_each(|target| hash_set::union_with(target, other));
}
