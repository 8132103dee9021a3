//! Tests that every supported container backend behaves like `Vec` /
//! `HashSet` under the algebra.
//!
//! Requires the `smallvec`, `arrayvec`, `fxhash` and `ahash` features.

use ahash::AHashSet;
use arrayvec::ArrayVec;
use container_algebra::prelude::*;
use rstest::rstest;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::collections::HashSet;

const ELEMENTS: [u32; 10] = [5, 1, 5, 2, 8, 2, 9, 5, 3, 1];
const REMOVE: [u32; 3] = [5, 2, 7];
const ADD: [u32; 5] = [4, 1, 4, 6, 9];

fn run_list<L: NativeList<u32>>(mut list: L) -> Vec<u32> {
    list.except_with(&REMOVE);
    list.union_with(&ADD);
    list.remove_where(&|element: &u32| *element == 8);
    list.as_slice().to_vec()
}

fn run_set<S: NativeHashSet<u32>>(mut set: S) -> Vec<u32> {
    set.except_with(&REMOVE);
    set.union_with(&ADD);
    let mut members: Vec<u32> = (0..16).filter(|element| set.contains(element)).collect();
    members.sort_unstable();
    members
}

// =============================================================================
// List Backends
// =============================================================================

#[rstest]
fn test_list_backends_agree_with_vec() {
    let reference = run_list(ELEMENTS.to_vec());
    assert_eq!(reference, vec![1, 9, 3, 1, 4, 6]);

    let spilled: SmallVec<[u32; 4]> = ELEMENTS.iter().copied().collect();
    assert!(spilled.spilled());
    assert_eq!(run_list(spilled), reference);

    let inline: SmallVec<[u32; 16]> = ELEMENTS.iter().copied().collect();
    assert!(!inline.spilled());
    assert_eq!(run_list(inline), reference);

    let fixed: ArrayVec<u32, 16> = ELEMENTS.iter().copied().collect();
    assert_eq!(run_list(fixed), reference);
}

#[rstest]
#[should_panic]
fn test_arrayvec_union_past_capacity_panics() {
    let mut fixed: ArrayVec<u32, 2> = ArrayVec::new();
    fixed.union_with(&[1, 2, 3]);
}

// =============================================================================
// Hash Set Backends
// =============================================================================

#[rstest]
fn test_hash_set_backends_agree_with_std() {
    let reference = run_set(ELEMENTS.iter().copied().collect::<HashSet<u32>>());
    assert_eq!(reference, vec![1, 3, 4, 6, 8, 9]);

    let fx: FxHashSet<u32> = ELEMENTS.iter().copied().collect();
    assert_eq!(run_set(fx), reference);

    let ahashed: AHashSet<u32> = ELEMENTS.iter().copied().collect();
    assert_eq!(run_set(ahashed), reference);
}
