//! Parallel batch drivers for the list operations.

use rayon::prelude::*;

use crate::algebra::list;
use crate::container::NativeList;
use crate::predicate::NativePredicate;

/// Applies [`list::except_with`] to every list in `lists`.
#[inline]
pub fn par_except_with<T, L>(lists: &mut [L], other: &[T])
where
    T: PartialEq + Sync,
    L: NativeList<T> + Send,
{
    lists
        .par_iter_mut()
        .for_each(|target| list::except_with(target, other));
}

/// Applies [`list::union_with`] to every list in `lists`.
#[inline]
pub fn par_union_with<T, L>(lists: &mut [L], other: &[T])
where
    T: Copy + PartialEq + Sync,
    L: NativeList<T> + Send,
{
    lists
        .par_iter_mut()
        .for_each(|target| list::union_with(target, other));
}

/// Applies [`list::remove_where`] to every list in `lists`, sharing one
/// predicate across all workers.
#[inline]
pub fn par_remove_where<T, L, P>(lists: &mut [L], predicate: &P)
where
    L: NativeList<T> + Send,
    P: NativePredicate<T> + Sync,
{
    lists
        .par_iter_mut()
        .for_each(|target| list::remove_where(target, predicate));
}
