//! Hash set algebra: `except_with`, `union_with`.
//!
//! The secondary operand is any borrowed iterable of elements, so a set can
//! be combined with a list, a slice, another set, or an iterator adapter.
//!
//! # Examples
//!
//! ```rust
//! use container_algebra::algebra::hash_set;
//! use std::collections::HashSet;
//!
//! let mut set: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! hash_set::except_with(&mut set, &[2, 4]);
//! assert_eq!(set, HashSet::from([1, 3]));
//!
//! let mut set: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! hash_set::union_with(&mut set, &vec![2, 4]);
//! assert_eq!(set, HashSet::from([1, 2, 3, 4]));
//! ```

use crate::container::NativeHashSet;

// =============================================================================
// Operations
// =============================================================================

/// Removes from `set` every element yielded by `other`.
///
/// Removal is attempted unconditionally; absent elements are a no-op.
///
/// # Arguments
///
/// * `set` - The set to shrink in place
/// * `other` - The elements to remove (read only)
///
/// # Complexity
///
/// O(m) amortized
///
/// # Examples
///
/// ```rust
/// use container_algebra::algebra::hash_set;
/// use std::collections::HashSet;
///
/// let mut set: HashSet<u8> = [1, 2].into_iter().collect();
/// let other: HashSet<u8> = [2, 9].into_iter().collect();
/// hash_set::except_with(&mut set, &other);
/// assert_eq!(set.len(), 1);
/// ```
#[inline]
pub fn except_with<'a, T, S, I>(set: &mut S, other: I)
where
    T: 'a,
    S: NativeHashSet<T>,
    I: IntoIterator<Item = &'a T>,
{
    for element in other {
        set.remove(element);
    }
}

/// Adds to `set` every element yielded by `other` that is not yet a member.
///
/// # Arguments
///
/// * `set` - The set to extend in place
/// * `other` - The candidate elements (read only)
///
/// # Complexity
///
/// O(m) amortized
///
/// # Examples
///
/// ```rust
/// use container_algebra::algebra::hash_set;
/// use std::collections::HashSet;
///
/// let mut set: HashSet<u8> = HashSet::new();
/// hash_set::union_with(&mut set, &[4, 4, 5]);
/// assert_eq!(set.len(), 2);
/// ```
#[inline]
pub fn union_with<'a, T, S, I>(set: &mut S, other: I)
where
    T: Copy + 'a,
    S: NativeHashSet<T>,
    I: IntoIterator<Item = &'a T>,
{
    for element in other {
        if set.contains(element) {
            continue;
        }
        set.insert(*element);
    }
}

// =============================================================================
// HashSetAlgebra Extension Trait
// =============================================================================

/// Method syntax for the hash set operations.
///
/// Blanket implemented for every [`NativeHashSet`].
///
/// # Examples
///
/// ```rust
/// use container_algebra::prelude::*;
/// use std::collections::HashSet;
///
/// let mut set: HashSet<i32> = [1, 2, 3].into_iter().collect();
/// set.union_with(&[4]);
/// set.except_with(&[1]);
/// assert_eq!(set, HashSet::from([2, 3, 4]));
/// ```
pub trait HashSetAlgebra<T>: NativeHashSet<T> + Sized {
    /// See [`except_with`].
    #[inline]
    fn except_with<'a, I>(&mut self, other: I)
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        except_with(self, other);
    }

    /// See [`union_with`].
    #[inline]
    fn union_with<'a, I>(&mut self, other: I)
    where
        T: Copy + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        union_with(self, other);
    }
}

impl<T, S: NativeHashSet<T>> HashSetAlgebra<T> for S {}

// =============================================================================
// Tests
// =============================================================================
