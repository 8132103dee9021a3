//! Tests for the raw-address entry points.
//!
//! Worker threads here only receive addresses, the way jobs from an external
//! scheduler do. Exclusivity is arranged by the test: each worker gets its
//! own list, and the shared predicate and operand are only read.

#![cfg(all(feature = "list", feature = "hashset"))]
#![allow(unsafe_code)]

use container_algebra::algebra::{hash_set, list, raw};
use container_algebra::predicate::{ContainedIn, EqualTo, NativePredicate, Not};
use rstest::rstest;
use std::collections::HashSet;
use std::thread;

/// An address handed to a worker. The scheduler, not the type system,
/// guarantees nobody else touches the pointee while the job runs.
struct JobAddress<T>(*mut T);

impl<T> Clone for JobAddress<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for JobAddress<T> {}

// SAFETY: Each JobAddress is given to exactly one worker, and the spawning
// thread does not touch the pointee until the scope joins.
unsafe impl<T: Send> Send for JobAddress<T> {}

/// A read-only address handed to every worker of a batch. Copyable
/// whatever the pointee, since only the address is duplicated.
struct SharedAddress<T>(*const T);

impl<T> Clone for SharedAddress<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SharedAddress<T> {}

// SAFETY: The pointee is only read while workers run.
unsafe impl<T: Sync> Send for SharedAddress<T> {}

#[rstest]
fn test_remove_where_raw_matches_reference() {
    let predicate = Not(|element: &u16| element % 5 != 0);
    let mut by_reference: Vec<u16> = (0..100).collect();
    let mut by_address = by_reference.clone();

    list::remove_where(&mut by_reference, &predicate);
    // SAFETY: Live locals, no other access during the call.
    unsafe { raw::list::remove_where(&raw mut by_address, &raw const predicate) };

    assert_eq!(by_reference, by_address);
    assert!(by_address.iter().all(|element| element % 5 != 0));
}

#[rstest]
fn test_workers_remove_where_through_addresses() {
    let predicate = |element: &u32| element % 2 == 0;
    let mut chunks: Vec<Vec<u32>> = (0..8)
        .map(|chunk| (chunk * 16..chunk * 16 + 16).collect())
        .collect();
    let expected: Vec<Vec<u32>> = chunks
        .iter()
        .map(|chunk| chunk.iter().copied().filter(|element| !predicate(element)).collect())
        .collect();

    let shared = SharedAddress(&raw const predicate);
    thread::scope(|scope| {
        for chunk in &mut chunks {
            let job = JobAddress(chunk as *mut Vec<u32>);
            scope.spawn(move || {
                let (job, shared) = (job, shared);
                // SAFETY: This worker is the only user of `job`; `shared` is read only.
                unsafe { raw::list::remove_where(job.0, shared.0) };
            });
        }
    });

    assert_eq!(chunks, expected);
}

#[rstest]
fn test_workers_except_and_union_through_addresses() {
    let remove: Vec<u32> = vec![0, 1, 17, 18];
    let add: Vec<u32> = vec![1000, 1001];
    let mut chunks: Vec<Vec<u32>> = (0..4)
        .map(|chunk| (chunk * 10..chunk * 10 + 10).collect())
        .collect();

    let mut expected = chunks.clone();
    for chunk in &mut expected {
        list::except_with(chunk, &remove);
        list::union_with(chunk, &add);
    }

    let (shared_remove, shared_add) = (
        SharedAddress(&raw const remove),
        SharedAddress(&raw const add),
    );
    thread::scope(|scope| {
        for chunk in &mut chunks {
            let job = JobAddress(chunk as *mut Vec<u32>);
            scope.spawn(move || {
                let (job, shared_remove, shared_add) = (job, shared_remove, shared_add);
                // SAFETY: Exclusive job address, read-only shared operands that
                // do not alias any chunk.
                unsafe {
                    raw::list::except_with(job.0, shared_remove.0);
                    raw::list::union_with(job.0, shared_add.0);
                }
            });
        }
    });

    assert_eq!(chunks, expected);
    assert_eq!(remove, vec![0, 1, 17, 18]);
}

#[rstest]
fn test_hash_set_raw_matches_reference() {
    let operand = vec![2, 4, 6];
    let mut by_reference: HashSet<i32> = (0..5).collect();
    let mut by_address = by_reference.clone();

    hash_set::except_with(&mut by_reference, &operand);
    hash_set::union_with(&mut by_reference, &operand);
    // SAFETY: Distinct live locals, no other access during the calls.
    unsafe {
        raw::hash_set::except_with(&raw mut by_address, &raw const operand);
        raw::hash_set::union_with(&raw mut by_address, &raw const operand);
    }

    assert_eq!(by_reference, by_address);
}

#[rstest]
fn test_raw_with_value_predicates() {
    let pool = [3, 4];
    let predicate = ContainedIn(&pool);
    let mut list_a = vec![1, 3, 4, 5];

    // SAFETY: Live locals, no other access during the call.
    unsafe { raw::list::remove_where(&raw mut list_a, &raw const predicate) };
    assert_eq!(list_a, vec![1, 5]);

    let predicate = EqualTo(5);
    assert!(predicate.evaluate(&5));
    // SAFETY: As above.
    unsafe { raw::list::remove_where(&raw mut list_a, &raw const predicate) };
    assert_eq!(list_a, vec![1]);
}

#[cfg(debug_assertions)]
#[rstest]
#[should_panic(expected = "list address is null")]
fn test_null_list_address_is_caught_in_debug() {
    let predicate = |_: &i32| true;
    // SAFETY: Not safe; the debug assertion fires before any dereference.
    unsafe {
        raw::list::remove_where::<i32, Vec<i32>, _>(std::ptr::null_mut(), &raw const predicate);
    }
}

#[rstest]
fn test_shared_address_of_owned_operand_reaches_every_worker() {
    let remove: Vec<u32> = vec![2, 3];
    let shared = SharedAddress(&raw const remove);
    let mut lists: [Vec<u32>; 3] = [vec![1, 2, 3], vec![3, 4], vec![2, 5]];

    thread::scope(|scope| {
        for target in &mut lists {
            let job = JobAddress(target as *mut Vec<u32>);
            scope.spawn(move || {
                let (job, shared) = (job, shared);
                // SAFETY: Exclusive job address; `remove` is only read.
                unsafe { raw::list::except_with(job.0, shared.0) };
            });
        }
    });

    let copied = shared;
    assert_eq!(copied.0, shared.0);
    assert_eq!(lists, [vec![1], vec![4], vec![5]]);
}

#[cfg(debug_assertions)]
#[rstest]
#[should_panic(expected = "list and other share an address")]
fn test_worker_list_passed_as_its_own_operand_is_caught_in_debug() {
    let mut chunk: Vec<u32> = vec![1, 2, 3];
    let job = JobAddress(&raw mut chunk);
    // SAFETY: Not safe; the debug assertion fires before any dereference.
    unsafe { raw::list::except_with(job.0, job.0.cast_const()) };
}
