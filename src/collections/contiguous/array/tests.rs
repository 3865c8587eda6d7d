#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};
use std::iter;
use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::{DropCounter, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let arr = Array::<ZeroSizedType>::repeat_default(5);
    assert_eq!(arr[0], ZeroSizedType, "Indexing with no offset should work.");
    assert_eq!(arr[4], ZeroSizedType, "Indexing with an in-bounds offset should work.");
    assert_eq!(arr.iter().len(), 5, "Should iterate over the right number of ZST instances.");

    let mut arr = arr.forget_init();
    let old_ptr = arr.ptr;
    arr.realloc(30);
    assert_eq!(arr.ptr, old_ptr, "Pointer shouldn't change when reallocated for a ZST.");
}

#[test]
fn test_realloc() {
    let mut arr = Array::<usize>::new_uninit(5);
    let old_ptr = arr.ptr;
    arr.realloc(5);
    assert_eq!(arr.ptr, old_ptr, "When reallocating to the same size, the pointer shouldn't change.");

    arr.realloc(0);
    assert_eq!(arr.size(), 0);

    arr.realloc(10);
    for (index, slot) in arr.iter_mut().enumerate() {
        slot.write(index);
    }

    arr.realloc(15);
    for index in 0..10 {
        // SAFETY: Values below 10 were written before growing.
        assert_eq!(
            unsafe { arr[index].assume_init() },
            index,
            "When growing, all elements should remain in the Array."
        );
    }

    assert_panics!({
        let mut arr = Array::<u64>::new_uninit(5);
        arr.realloc(isize::MAX as usize + 1)
    });
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let arr = Array::from_fn(10, |_| counter.clone());

    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let arr = Array::from_fn(10, |_| MaybeUninit::new(counter.clone()));
    drop(arr);
    assert_eq!(counter.take(), 0, "MaybeUninit elements should never be dropped.");
}

#[test]
fn test_equality_and_hash() {
    let arr: Array<usize> = (0..5).collect();

    assert_eq!(
        arr,
        Array::from_fn(5, |index| index),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Array::from_fn(5, |index| index * 2), arr);

    let borrowed: &[usize] = arr.borrow();
    assert_eq!(borrowed, &[0, 1, 2, 3, 4], "Borrow equality should be upheld.");
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(Array::from_fn(5, |index| index)),
        "Equal arrays should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut arr: Array<usize> = (0..5).collect();
    let collected: Array<usize> = arr.iter().cloned().collect();
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*arr, [0_usize, 2, 4, 6, 8], "Array mutated by iterator should equal this slice.");

    let mut iter = arr.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = DropCounter::new();
    let arr: Array<DropCounter> = iter::repeat_with(|| counter.clone()).take(10).collect();

    let mut iter = arr.into_iter();
    drop(iter.next());
    assert_eq!(counter.take(), 1);
    drop(iter);
    assert_eq!(counter.take(), 9, "Dropping an owned iterator should drop the remaining elements.");
}

#[test]
fn test_display() {
    let arr: Array<u8> = (1..=3).collect();
    assert_eq!(arr.to_string(), "[1, 2, 3]");
    assert_eq!(Array::<u8>::new().to_string(), "[]");
}
