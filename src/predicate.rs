//! Statically dispatched element predicates.
//!
//! A [`NativePredicate`] is a small value that answers one question about
//! one element. Predicates are always passed as generic parameters, so every
//! call site gets its own specialized copy of the removal loop.
//!
//! Any `Fn(&T) -> bool` closure is a predicate. Named predicates and the
//! combinators in this module cover the cases where a closure is awkward to
//! spell out or has to cross into a worker context as a plain value.
//!
//! # Examples
//!
//! ```rust
//! use container_algebra::predicate::{And, EqualTo, NativePredicate, Not};
//!
//! let is_even = |element: &i32| element % 2 == 0;
//! let even_but_not_four = And(is_even, Not(EqualTo(4)));
//!
//! assert!(even_but_not_four.evaluate(&2));
//! assert!(!even_but_not_four.evaluate(&4));
//! assert!(!even_but_not_four.evaluate(&5));
//! ```

// =============================================================================
// NativePredicate Definition
// =============================================================================

/// A pure boolean test over a single element.
///
/// The element is passed by reference so large values are never copied to
/// evaluate the test.
///
/// # Laws
///
/// Implementations must not mutate the container the element was borrowed
/// from (they cannot through `&T`, but interior mutability could).
pub trait NativePredicate<T: ?Sized> {
    /// Evaluates the predicate against `element`.
    fn evaluate(&self, element: &T) -> bool;
}

impl<T, F> NativePredicate<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    #[inline]
    fn evaluate(&self, element: &T) -> bool {
        self(element)
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Negates the wrapped predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Not<P>(pub P);

impl<T, P> NativePredicate<T> for Not<P>
where
    T: ?Sized,
    P: NativePredicate<T>,
{
    #[inline]
    fn evaluate(&self, element: &T) -> bool {
        !self.0.evaluate(element)
    }
}

/// True when both predicates hold. The right side is skipped when the left
/// side is false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct And<P, Q>(pub P, pub Q);

impl<T, P, Q> NativePredicate<T> for And<P, Q>
where
    T: ?Sized,
    P: NativePredicate<T>,
    Q: NativePredicate<T>,
{
    #[inline]
    fn evaluate(&self, element: &T) -> bool {
        self.0.evaluate(element) && self.1.evaluate(element)
    }
}

/// True when either predicate holds. The right side is skipped when the left
/// side is true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Or<P, Q>(pub P, pub Q);

impl<T, P, Q> NativePredicate<T> for Or<P, Q>
where
    T: ?Sized,
    P: NativePredicate<T>,
    Q: NativePredicate<T>,
{
    #[inline]
    fn evaluate(&self, element: &T) -> bool {
        self.0.evaluate(element) || self.1.evaluate(element)
    }
}

// =============================================================================
// Value Predicates
// =============================================================================

/// True for elements equal to the wrapped value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EqualTo<T>(pub T);

impl<T: PartialEq> NativePredicate<T> for EqualTo<T> {
    #[inline]
    fn evaluate(&self, element: &T) -> bool {
        *element == self.0
    }
}

/// True for elements equal to any element of the wrapped slice.
///
/// Removing by `ContainedIn(other)` gives the same result as the list
/// `except_with(list, other)`.
///
/// # Complexity
///
/// O(m) per evaluation, where m is the slice length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainedIn<'a, T>(pub &'a [T]);

impl<T: PartialEq> NativePredicate<T> for ContainedIn<'_, T> {
    #[inline]
    fn evaluate(&self, element: &T) -> bool {
        self.0.iter().any(|candidate| element == candidate)
    }
}

static_assertions::assert_impl_all!(Not<EqualTo<u32>>: NativePredicate<u32>, Send, Sync, Copy);
static_assertions::assert_impl_all!(
    ContainedIn<'static, u32>: NativePredicate<u32>, Send, Sync, Copy
);

// =============================================================================
// Tests
// =============================================================================
