//! # container-algebra
//!
//! In-place set algebra and predicate-based removal over flat lists and
//! hash sets, built for the hot loops of data-oriented simulation code.
//!
//! ## Overview
//!
//! Every operation mutates a caller-owned container in place, reads its
//! second operand without touching it, and allocates nothing beyond what the
//! container's own `push`/`insert` does. All operations are generic and
//! monomorphized per element, container, and predicate type; nothing on the
//! hot path goes through `dyn`.
//!
//! - **Containers**: [`NativeList`](container::NativeList) and
//!   [`NativeHashSet`](container::NativeHashSet) abstract over `Vec`,
//!   `SmallVec`, `ArrayVec`, `HashSet`, `FxHashSet` and `AHashSet`
//! - **Predicates**: [`NativePredicate`](predicate::NativePredicate) plus
//!   `Not`/`And`/`Or`/`EqualTo`/`ContainedIn` combinators
//! - **List algebra**: `except_with`, `union_with`, `remove_where`
//! - **Hash set algebra**: `except_with`, `union_with`
//! - **Raw adapters**: the same operations addressed through raw pointers,
//!   for worker code that only holds addresses
//! - **Parallel drivers**: one operation per container over a rayon pool
//!
//! ## Feature Flags
//!
//! - `list`: list algebra (default)
//! - `hashset`: hash set algebra (default)
//! - `smallvec`, `arrayvec`: additional list backends
//! - `fxhash`, `ahash`: additional hash set backends
//! - `rayon`: parallel batch drivers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use container_algebra::prelude::*;
//!
//! let mut list = vec![1, 2, 3, 4, 5];
//! list.except_with(&[2, 4]);
//! assert_eq!(list, vec![1, 3, 5]);
//!
//! list.union_with(&[5, 6]);
//! assert_eq!(list, vec![1, 3, 5, 6]);
//!
//! list.remove_where(&|element: &i32| *element > 4);
//! assert_eq!(list, vec![1, 3]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container and predicate traits, the combinators, and the
/// method-syntax extension traits. The free functions stay under their
/// modules because the list and hash set variants share names.
///
/// # Usage
///
/// ```rust
/// use container_algebra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::predicate::*;

    #[cfg(feature = "list")]
    pub use crate::algebra::ListAlgebra;

    #[cfg(feature = "hashset")]
    pub use crate::algebra::HashSetAlgebra;
}

pub mod container;
pub mod predicate;

#[cfg(any(feature = "list", feature = "hashset"))]
pub mod algebra;

#[cfg(feature = "rayon")]
pub mod parallel;
