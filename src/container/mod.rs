//! Container abstractions the algebra is written against.
//!
//! The algebra never owns, allocates, or frees a container. It only needs a
//! handful of primitives from each kind:
//!
//! - [`NativeList`]: contiguous, order-preserving, duplicate-permitting
//!   sequence with index access, append, and shift removal
//! - [`NativeHashSet`]: unordered, deduplicated collection with membership,
//!   insert, and remove
//!
//! Growth policy stays with the container: a `Vec` reallocates, an
//! `ArrayVec` panics at capacity, a `SmallVec` spills to the heap.
//!
//! # Supported Containers
//!
//! | Container | Trait | Feature |
//! |-----------|-------|---------|
//! | `Vec<T>` | [`NativeList`] | always |
//! | `SmallVec<A>` | [`NativeList`] | `smallvec` |
//! | `ArrayVec<T, CAP>` | [`NativeList`] | `arrayvec` |
//! | `HashSet<T, S>` | [`NativeHashSet`] | always |
//! | `FxHashSet<T>` | [`NativeHashSet`] | `fxhash` (alias of `HashSet`) |
//! | `AHashSet<T, S>` | [`NativeHashSet`] | `ahash` |

mod hash_set;
mod list;

pub use hash_set::NativeHashSet;
pub use list::NativeList;
