//! The hash set abstraction and its implementations.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

// =============================================================================
// NativeHashSet Definition
// =============================================================================

/// An unordered, deduplicated collection of elements.
///
/// Implementations never hold two equal elements. Enumeration order and
/// growth policy belong to the implementing container.
///
/// # Time Complexity
///
/// | Operation  | Complexity     |
/// |------------|----------------|
/// | `contains` | O(1) amortized |
/// | `insert`   | O(1) amortized |
/// | `remove`   | O(1) amortized |
/// | `len`      | O(1)           |
///
/// # Examples
///
/// ```rust
/// use container_algebra::container::NativeHashSet;
/// use std::collections::HashSet;
///
/// fn track<S: NativeHashSet<u64>>(set: &mut S, entity: u64) -> bool {
///     set.insert(entity)
/// }
///
/// let mut set = HashSet::new();
/// assert!(track(&mut set, 7));
/// assert!(!track(&mut set, 7));
/// ```
pub trait NativeHashSet<T> {
    /// Returns `true` if an element equal to `element` is a member.
    fn contains(&self, element: &T) -> bool;

    /// Adds `element`, returning `true` if it was not already a member.
    fn insert(&mut self, element: T) -> bool;

    /// Removes `element`, returning `true` if it was a member.
    fn remove(&mut self, element: &T) -> bool;

    /// Returns the number of members.
    fn len(&self) -> usize;

    /// Returns `true` if the set has no members.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Implementations
// =============================================================================

/// Covers `rustc_hash::FxHashSet<T>` as well, which is a `HashSet` alias.
impl<T, S> NativeHashSet<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn contains(&self, element: &T) -> bool {
        HashSet::contains(self, element)
    }

    #[inline]
    fn insert(&mut self, element: T) -> bool {
        HashSet::insert(self, element)
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        HashSet::remove(self, element)
    }

    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

#[cfg(feature = "ahash")]
impl<T, S> NativeHashSet<T> for ahash::AHashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn contains(&self, element: &T) -> bool {
        HashSet::<T, S>::contains(self, element)
    }

    #[inline]
    fn insert(&mut self, element: T) -> bool {
        HashSet::<T, S>::insert(self, element)
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        HashSet::<T, S>::remove(self, element)
    }

    #[inline]
    fn len(&self) -> usize {
        HashSet::<T, S>::len(self)
    }
}

static_assertions::assert_impl_all!(HashSet<u32>: NativeHashSet<u32>);

#[cfg(feature = "fxhash")]
static_assertions::assert_impl_all!(rustc_hash::FxHashSet<u32>: NativeHashSet<u32>);

#[cfg(feature = "ahash")]
static_assertions::assert_impl_all!(ahash::AHashSet<u32>: NativeHashSet<u32>);

// =============================================================================
// Tests
// =============================================================================
