//! Batch drivers that run one operation per container on the rayon pool.
//!
//! Simulation pipelines often hold many independent containers (one per
//! chunk, per archetype, per team) that all need the same operation against
//! the same operand. The drivers here split a `&mut [C]` across rayon
//! workers, so each container is mutated by exactly one worker and the shared
//! operand is only read.
//!
//! Each container ends up exactly as if the sequential operation had been
//! applied to it; only the order in which containers are processed differs.
//!
//! Requires the `rayon` feature to be enabled.
//!
//! # Examples
//!
//! ```rust
//! use container_algebra::parallel;
//!
//! let mut chunks = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
//! parallel::list::par_remove_where(&mut chunks, &|element: &i32| element % 2 == 0);
//! assert_eq!(chunks, vec![vec![1, 3], vec![5], vec![7, 9]]);
//! ```

pub mod hash_set;
pub mod list;
