//! In-place set algebra over [`NativeList`] and [`NativeHashSet`].
//!
//! Every operation mutates its first operand in place and only reads the
//! second. Operations come in three shapes:
//!
//! - free functions in [`list`] and [`hash_set`], the single implementation
//!   of each algorithm
//! - method syntax through [`ListAlgebra`] and [`HashSetAlgebra`], blanket
//!   implemented for every container
//! - raw-address adapters in [`raw`] for worker code that only holds
//!   pointers, delegating to the free functions
//!
//! # Operations
//!
//! | Operation      | List       | Hash set |
//! |----------------|------------|----------|
//! | `except_with`  | O(n * m)   | O(m)     |
//! | `union_with`   | O(m * (n + m)) | O(m) amortized |
//! | `remove_where` | O(n * k)   | -        |
//!
//! Here n is the primary length, m the secondary length and k the cost of one
//! shift removal.
//!
//! [`NativeList`]: crate::container::NativeList
//! [`NativeHashSet`]: crate::container::NativeHashSet

#[cfg(feature = "hashset")]
pub mod hash_set;
#[cfg(feature = "list")]
pub mod list;
pub mod raw;

#[cfg(feature = "hashset")]
pub use hash_set::HashSetAlgebra;
#[cfg(feature = "list")]
pub use list::ListAlgebra;
