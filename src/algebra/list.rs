//! List algebra: `except_with`, `union_with`, `remove_where`.
//!
//! All three operations keep the relative order of surviving elements and
//! work by in-place shift removal and append, never by building a second
//! list.
//!
//! # Examples
//!
//! ```rust
//! use container_algebra::algebra::list;
//!
//! let mut entities = vec![1, 2, 3, 4, 5];
//! list::except_with(&mut entities, &[2, 4]);
//! assert_eq!(entities, vec![1, 3, 5]);
//!
//! let mut entities = vec![1, 2, 3];
//! list::union_with(&mut entities, &[3, 4]);
//! assert_eq!(entities, vec![1, 2, 3, 4]);
//!
//! let mut entities = vec![1, 2, 3, 4, 5];
//! list::remove_where(&mut entities, &|entity: &i32| entity % 2 == 0);
//! assert_eq!(entities, vec![1, 3, 5]);
//! ```

use crate::container::NativeList;
use crate::predicate::NativePredicate;

// =============================================================================
// Operations
// =============================================================================

/// Removes from `list` every element equal to any element of `other`.
///
/// The list is scanned left to right. When the element at the current
/// position matches, it is removed and the same position is examined again,
/// since it now holds the element that used to follow. A position is only
/// left behind once its occupant has been checked against all of `other`.
///
/// Duplicates in `list` are all removed; duplicates in `other` change
/// nothing.
///
/// # Arguments
///
/// * `list` - The list to shrink in place
/// * `other` - The elements to remove (read only)
///
/// # Complexity
///
/// O(n * m) comparisons plus the shift cost of each removal
///
/// # Examples
///
/// ```rust
/// use container_algebra::algebra::list;
///
/// let mut list = vec![2, 2, 1, 2, 3];
/// list::except_with(&mut list, &[2]);
/// assert_eq!(list, vec![1, 3]);
/// ```
#[inline]
pub fn except_with<T, L>(list: &mut L, other: &[T])
where
    T: PartialEq,
    L: NativeList<T>,
{
    let mut index = 0;
    while index < list.len() {
        let element = &list.as_slice()[index];
        if other.iter().any(|candidate| element == candidate) {
            list.remove_at(index);
        } else {
            index += 1;
        }
    }
}

/// Appends every element of `other` that is not yet present in `list`.
///
/// Presence is checked against the current contents of `list`, which
/// includes elements appended earlier in the same call. A value repeated in
/// `other` is therefore appended at most once, at the position of its first
/// occurrence. Elements already in `list` (including its own duplicates) are
/// left untouched.
///
/// # Arguments
///
/// * `list` - The list to extend in place
/// * `other` - The candidate elements, in the order they are appended
///
/// # Complexity
///
/// O(m * (n + m)) comparisons
///
/// # Examples
///
/// ```rust
/// use container_algebra::algebra::list;
///
/// let mut list = vec![1, 1];
/// list::union_with(&mut list, &[3, 1, 3, 2]);
/// assert_eq!(list, vec![1, 1, 3, 2]);
/// ```
#[inline]
pub fn union_with<T, L>(list: &mut L, other: &[T])
where
    T: Copy + PartialEq,
    L: NativeList<T>,
{
    for &element in other {
        if list.as_slice().contains(&element) {
            continue;
        }
        list.push(element);
    }
}

/// Removes every element of `list` for which `predicate` evaluates to `true`.
///
/// Positions are visited from last to first, so a shift removal only moves
/// elements that have already been evaluated. Each element is evaluated
/// exactly once, by reference.
///
/// # Arguments
///
/// * `list` - The list to filter in place
/// * `predicate` - The removal test
///
/// # Examples
///
/// ```rust
/// use container_algebra::algebra::list;
/// use container_algebra::predicate::EqualTo;
///
/// let mut list = vec![0, 3, 0, 4];
/// list::remove_where(&mut list, &EqualTo(0));
/// assert_eq!(list, vec![3, 4]);
/// ```
#[inline]
pub fn remove_where<T, L, P>(list: &mut L, predicate: &P)
where
    L: NativeList<T>,
    P: NativePredicate<T>,
{
    for index in (0..list.len()).rev() {
        if predicate.evaluate(&list.as_slice()[index]) {
            list.remove_at(index);
        }
    }
}

// =============================================================================
// ListAlgebra Extension Trait
// =============================================================================

/// Method syntax for the list operations.
///
/// Blanket implemented for every [`NativeList`]. Each method delegates to the
/// free function of the same name in this module.
///
/// # Examples
///
/// ```rust
/// use container_algebra::prelude::*;
///
/// let mut list = vec![5, 6, 7];
/// list.union_with(&[8]);
/// list.except_with(&[5]);
/// list.remove_where(&EqualTo(7));
/// assert_eq!(list, vec![6, 8]);
/// ```
pub trait ListAlgebra<T>: NativeList<T> + Sized {
    /// See [`except_with`].
    #[inline]
    fn except_with(&mut self, other: &[T])
    where
        T: PartialEq,
    {
        except_with(self, other);
    }

    /// See [`union_with`].
    #[inline]
    fn union_with(&mut self, other: &[T])
    where
        T: Copy + PartialEq,
    {
        union_with(self, other);
    }

    /// See [`remove_where`].
    #[inline]
    fn remove_where<P>(&mut self, predicate: &P)
    where
        P: NativePredicate<T>,
    {
        remove_where(self, predicate);
    }
}

impl<T, L: NativeList<T>> ListAlgebra<T> for L {}

// =============================================================================
// Tests
// =============================================================================
