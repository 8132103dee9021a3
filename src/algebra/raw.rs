#![allow(unsafe_code)]
//! Raw-address entry points for worker contexts.
//!
//! Code scheduled by an external job system often receives its data as bare
//! addresses rather than borrows. The adapters here accept those addresses,
//! turn them into references, and delegate to the single implementation of
//! each operation in [`super::list`] and [`super::hash_set`]. They contain no
//! algorithm of their own, so both entry points always agree.
//!
//! # Safety
//!
//! Every adapter is an `unsafe fn` with the same contract:
//!
//! - every pointer is non-null, properly aligned, and points to an
//!   initialized value of its type
//! - the mutated container is not accessed through any other pointer or
//!   reference for the duration of the call
//! - the read-only operands are not mutated for the duration of the call and
//!   do not alias the mutated container
//!
//! Violating any of these is undefined behavior. In debug builds null
//! addresses, and a list operand sharing the mutated list's address, are
//! caught by a `debug_assert!`.
//!
//! # Examples
//!
//! ```rust
//! # #![allow(unsafe_code)]
//! use container_algebra::algebra::raw;
//!
//! let mut list = vec![1, 2, 3, 4, 5];
//! let is_even = |element: &i32| element % 2 == 0;
//!
//! let list_address: *mut Vec<i32> = &mut list;
//! // SAFETY: both addresses come from live locals that nothing else touches.
//! unsafe { raw::list::remove_where(list_address, &is_even) };
//!
//! assert_eq!(list, vec![1, 3, 5]);
//! ```

/// Raw-address adapters for the list operations.
#[cfg(feature = "list")]
pub mod list {
    use crate::container::NativeList;
    use crate::predicate::NativePredicate;

    /// Raw-address form of [`crate::algebra::list::remove_where`].
    ///
    /// # Safety
    ///
    /// `list` must be valid for reads and writes and not aliased for the
    /// duration of the call. `predicate` must be valid for reads. See the
    /// [module documentation](super) for the full contract.
    #[inline]
    pub unsafe fn remove_where<T, L, P>(list: *mut L, predicate: *const P)
    where
        L: NativeList<T>,
        P: NativePredicate<T>,
    {
        debug_assert!(!list.is_null(), "remove_where: list address is null");
        debug_assert!(
            !predicate.is_null(),
            "remove_where: predicate address is null"
        );

        // SAFETY: The caller guarantees both addresses point to live values
        // and that `list` is exclusively ours until we return.
        let (list, predicate) = unsafe { (&mut *list, &*predicate) };
        crate::algebra::list::remove_where(list, predicate);
    }

    /// Raw-address form of [`crate::algebra::list::except_with`].
    ///
    /// # Safety
    ///
    /// `list` must be valid for reads and writes and not aliased for the
    /// duration of the call. `other` must be valid for reads and must not
    /// point to the same container as `list`.
    #[inline]
    pub unsafe fn except_with<T, L, O>(list: *mut L, other: *const O)
    where
        T: PartialEq,
        L: NativeList<T>,
        O: NativeList<T>,
    {
        debug_assert!(!list.is_null(), "except_with: list address is null");
        debug_assert!(!other.is_null(), "except_with: other address is null");
        debug_assert!(
            !core::ptr::eq(list.cast_const().cast::<u8>(), other.cast::<u8>()),
            "except_with: list and other share an address"
        );

        // SAFETY: The caller guarantees both addresses are live and that they
        // do not alias, so the shared and exclusive borrows are disjoint.
        let (list, other) = unsafe { (&mut *list, &*other) };
        crate::algebra::list::except_with(list, other.as_slice());
    }

    /// Raw-address form of [`crate::algebra::list::union_with`].
    ///
    /// # Safety
    ///
    /// Same contract as [`except_with`].
    #[inline]
    pub unsafe fn union_with<T, L, O>(list: *mut L, other: *const O)
    where
        T: Copy + PartialEq,
        L: NativeList<T>,
        O: NativeList<T>,
    {
        debug_assert!(!list.is_null(), "union_with: list address is null");
        debug_assert!(!other.is_null(), "union_with: other address is null");
        debug_assert!(
            !core::ptr::eq(list.cast_const().cast::<u8>(), other.cast::<u8>()),
            "union_with: list and other share an address"
        );

        // SAFETY: See `except_with`.
        let (list, other) = unsafe { (&mut *list, &*other) };
        crate::algebra::list::union_with(list, other.as_slice());
    }
}

/// Raw-address adapters for the hash set operations.
///
/// The secondary operand is addressed as a [`NativeList`], which is how
/// worker code usually receives a batch of elements.
///
/// [`NativeList`]: crate::container::NativeList
#[cfg(feature = "hashset")]
pub mod hash_set {
    use crate::container::{NativeHashSet, NativeList};

    /// Raw-address form of [`crate::algebra::hash_set::except_with`].
    ///
    /// # Safety
    ///
    /// `set` must be valid for reads and writes and not aliased for the
    /// duration of the call. `other` must be valid for reads.
    #[inline]
    pub unsafe fn except_with<T, S, O>(set: *mut S, other: *const O)
    where
        S: NativeHashSet<T>,
        O: NativeList<T>,
    {
        debug_assert!(!set.is_null(), "except_with: set address is null");
        debug_assert!(!other.is_null(), "except_with: other address is null");

        // SAFETY: The caller guarantees both addresses are live and that
        // `set` is exclusively ours until we return.
        let (set, other) = unsafe { (&mut *set, &*other) };
        crate::algebra::hash_set::except_with(set, other.as_slice());
    }

    /// Raw-address form of [`crate::algebra::hash_set::union_with`].
    ///
    /// # Safety
    ///
    /// Same contract as [`except_with`].
    #[inline]
    pub unsafe fn union_with<T, S, O>(set: *mut S, other: *const O)
    where
        T: Copy,
        S: NativeHashSet<T>,
        O: NativeList<T>,
    {
        debug_assert!(!set.is_null(), "union_with: set address is null");
        debug_assert!(!other.is_null(), "union_with: other address is null");

        // SAFETY: See `except_with`.
        let (set, other) = unsafe { (&mut *set, &*other) };
        crate::algebra::hash_set::union_with(set, other.as_slice());
    }
}

// =============================================================================
// Tests
// =============================================================================
