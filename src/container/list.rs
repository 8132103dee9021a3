//! The list abstraction and its implementations.

// =============================================================================
// NativeList Definition
// =============================================================================

/// A contiguous, order-preserving sequence of elements.
///
/// Duplicates are permitted. The length of the live region is tracked
/// separately from the backing capacity, and capacity growth is owned by the
/// implementing container.
///
/// # Required Primitives
///
/// | Primitive   | Meaning                                               |
/// |-------------|-------------------------------------------------------|
/// | `as_slice`  | index access over the live elements                   |
/// | `push`      | append at the end                                     |
/// | `remove_at` | remove one position, shifting the tail left by one    |
///
/// # Examples
///
/// ```rust
/// use container_algebra::container::NativeList;
///
/// fn first_or_zero<L: NativeList<u32>>(list: &L) -> u32 {
///     list.as_slice().first().copied().unwrap_or(0)
/// }
///
/// assert_eq!(first_or_zero(&vec![7, 8]), 7);
/// assert_eq!(first_or_zero(&Vec::new()), 0);
/// ```
pub trait NativeList<T> {
    /// Returns the live elements as a slice.
    fn as_slice(&self) -> &[T];

    /// Appends an element at the end of the list.
    ///
    /// # Panics
    ///
    /// Panics if the container cannot grow (for example a full `ArrayVec`).
    fn push(&mut self, element: T);

    /// Removes the element at `index`, shifting every following element one
    /// position to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn remove_at(&mut self, index: usize);

    /// Returns the number of live elements.
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Implementations
// =============================================================================

impl<T> NativeList<T> for Vec<T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }

    #[inline]
    fn push(&mut self, element: T) {
        Vec::push(self, element);
    }

    #[inline]
    fn remove_at(&mut self, index: usize) {
        Vec::remove(self, index);
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> NativeList<A::Item> for smallvec::SmallVec<A> {
    #[inline]
    fn as_slice(&self) -> &[A::Item] {
        smallvec::SmallVec::as_slice(self)
    }

    #[inline]
    fn push(&mut self, element: A::Item) {
        smallvec::SmallVec::push(self, element);
    }

    #[inline]
    fn remove_at(&mut self, index: usize) {
        smallvec::SmallVec::remove(self, index);
    }

    #[inline]
    fn len(&self) -> usize {
        smallvec::SmallVec::len(self)
    }
}

#[cfg(feature = "arrayvec")]
impl<T, const CAP: usize> NativeList<T> for arrayvec::ArrayVec<T, CAP> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        arrayvec::ArrayVec::as_slice(self)
    }

    #[inline]
    fn push(&mut self, element: T) {
        arrayvec::ArrayVec::push(self, element);
    }

    #[inline]
    fn remove_at(&mut self, index: usize) {
        arrayvec::ArrayVec::remove(self, index);
    }

    #[inline]
    fn len(&self) -> usize {
        arrayvec::ArrayVec::len(self)
    }
}

static_assertions::assert_impl_all!(Vec<u32>: NativeList<u32>);
static_assertions::assert_impl_all!(Vec<[f32; 4]>: NativeList<[f32; 4]>);

#[cfg(feature = "smallvec")]
static_assertions::assert_impl_all!(smallvec::SmallVec<[u32; 8]>: NativeList<u32>);

#[cfg(feature = "arrayvec")]
static_assertions::assert_impl_all!(arrayvec::ArrayVec<u32, 8>: NativeList<u32>);

// =============================================================================
// Tests
// =============================================================================
