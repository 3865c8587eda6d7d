#![cfg(test)]

use std::iter;

use proptest::prelude::*;

use super::*;
use crate::collections::contiguous::Array;
use crate::collections::traits::Sequence;
use crate::util::alloc::{DropCounter, ZeroSizedType};
use crate::util::error::{CapacityOverflow, CollectionError, IndexOutOfRange};
use crate::util::panic::assert_panics;

#[test]
fn test_growth() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    vec.push(0_u32);
    assert_eq!(vec.cap(), 10, "The first allocation should use the minimum capacity.");

    vec.extend(1..10);
    assert_eq!(vec.cap(), 10);
    vec.push(10);
    assert_eq!(vec.cap(), 20, "A full Vector should double its capacity.");

    vec.reserve(100);
    assert!(vec.cap() >= vec.len() + 100, "Reserve should guarantee the extra capacity.");

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 11);
    assert_eq!(&*vec, &(0..=10).collect::<Vec<_>>()[..], "Reallocation should keep all values.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..100 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 100);
    assert_eq!(vec.remove(50), ZeroSizedType);
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.len(), 98);
}

#[test]
fn test_bounds() {
    let mut vec: Vector<u8> = (0..3).collect();

    assert_eq!(vec.try_get(3), Err(IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(vec.try_set(3, 0), Err(IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(vec.try_remove(3), Err(IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(vec.try_insert(4, 0), Err(IndexOutOfRange { index: 4, len: 3 }));
    assert_eq!(vec.try_insert(3, 3), Ok(()), "Inserting at len should append.");
    assert_eq!(&*vec, &[0, 1, 2, 3]);

    assert_panics!({ vec.get(4); });
    assert_panics!({ vec.remove(10); });
    assert_panics!({ vec.insert(10, 0); });
}

#[test]
fn test_sequence_operations() {
    let mut vec: Vector<char> = "abcab".chars().collect();

    assert_eq!(vec.index_of(&'b'), Some(1));
    assert_eq!(vec.last_index_of(&'b'), Some(4));
    assert_eq!(vec.index_of(&'z'), None);
    assert!(vec.contains(&'c'));

    assert_eq!(vec.set(0, 'z'), 'a', "Set should return the replaced element.");
    assert_eq!(vec.remove_item(&'b'), Some('b'), "Only the first occurrence should be removed.");
    assert_eq!(&*vec, &['z', 'c', 'a', 'b']);

    assert_eq!(Sequence::remove_at(&mut vec, 1), Ok('c'));
    assert_eq!(Sequence::get(&vec, 5), Err(IndexOutOfRange { index: 5, len: 3 }));
}

#[test]
fn test_sub_vector() {
    let vec: Vector<u8> = (0..10).collect();

    assert_eq!(&*vec.sub_vector(2, 5), &[2, 3, 4]);
    assert!(vec.sub_vector(4, 4).is_empty());
    assert!(
        vec.try_sub_vector(5, 2).is_err_and(|err| err.is_invalid_argument()),
        "Reversed bounds should be an invalid argument."
    );
    assert_eq!(
        vec.try_sub_vector(0, 11),
        Err(CollectionError::IndexOutOfRange(IndexOutOfRange { index: 11, len: 10 }))
    );
}

#[test]
fn test_retain_and_truncate() {
    let counter = DropCounter::new();
    let mut vec: Vector<(usize, DropCounter)> =
        (0..10).map(|index| (index, counter.clone())).collect();

    vec.retain(|(index, _)| index % 3 == 0);
    assert_eq!(counter.take(), 6, "Rejected elements should be dropped.");
    assert_eq!(vec.iter().map(|(index, _)| *index).collect::<Vec<_>>(), [0, 3, 6, 9]);

    vec.truncate(2);
    assert_eq!(counter.take(), 2, "Truncated elements should be dropped.");

    vec.clear();
    assert_eq!(counter.take(), 2);
    assert!(vec.is_empty());
}

#[test]
fn test_drop_and_into_iter() {
    let counter = DropCounter::new();
    let vec: Vector<DropCounter> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(vec);
    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let vec: Vector<DropCounter> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = vec.into_iter();
    iter.next();
    iter.next_back();
    assert_eq!(counter.take(), 2);
    drop(iter);
    assert_eq!(counter.take(), 8, "Dropping an owned iterator should drop the rest.");
}

#[test]
fn test_conversions() {
    let mut vec: Vector<u8> = Vector::with_cap(20);
    vec.extend([1, 2, 3]);

    let arr = Array::from(vec.clone());
    assert_eq!(arr.size(), 3, "Converting to an Array should drop spare capacity.");
    assert_eq!(*arr, *vec);
    assert_eq!(vec.to_array(), arr);
    assert_eq!(Vector::from(arr), vec);

    let mut other: Vector<u8> = (4..6).collect();
    other.push(6);
    vec.append(other);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_formatting() {
    let vec: Vector<u8> = (1..=3).collect();
    assert_eq!(vec.to_string(), "[1, 2, 3]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2, 3], len: 3, cap: 3 }");
}

#[test]
fn test_cursor() {
    let mut vec: Vector<u8> = (0..6).collect();
    let mut cursor = vec.cursor();

    assert_eq!(
        cursor.remove(&mut vec),
        Err(CollectionError::InvalidArgument(crate::util::error::NOTHING_TO_REMOVE)),
        "Removing before the first element should fail."
    );

    while let Some(item) = cursor.next(&vec).expect("no outside modification") {
        if item % 2 == 1 {
            cursor.remove(&mut vec).expect("an element was yielded");
        }
    }
    assert_eq!(&*vec, &[0, 2, 4], "Removing through the cursor should skip nothing.");

    let mut cursor = vec.cursor();
    assert_eq!(cursor.next(&vec), Ok(Some(&0)));
    vec.push(6);
    assert!(
        cursor.next(&vec).is_err(),
        "Modification outside of the cursor should be detected."
    );
    assert!(cursor.remove(&mut vec).is_err_and(|err| err.is_concurrent_structural_change()));

    let mut cursor = vec.cursor();
    vec.set(0, 10);
    assert_eq!(cursor.next(&vec), Ok(Some(&10)), "Replacing isn't a structural modification.");
}

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    Pop,
    Insert(usize, u8),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Push),
        Just(Op::Pop),
        (any::<usize>(), any::<u8>()).prop_map(|(index, value)| Op::Insert(index, value)),
        any::<usize>().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_matches_std_vec(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut vec = Vector::new();
        let mut model = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    vec.push(value);
                    model.push(value);
                },
                Op::Pop => {
                    prop_assert_eq!(vec.pop(), model.pop());
                },
                Op::Insert(index, value) => {
                    let index = index % (model.len() + 1);
                    vec.insert(index, value);
                    model.insert(index, value);
                },
                Op::Remove(index) => {
                    if !model.is_empty() {
                        let index = index % model.len();
                        prop_assert_eq!(vec.remove(index), model.remove(index));
                    }
                },
            }
            prop_assert!(vec.len() <= vec.cap());
        }

        prop_assert_eq!(&*vec, &model[..]);
    }

    #[test]
    fn prop_to_array_round_trip(items in prop::collection::vec(any::<i32>(), 0..100)) {
        let vec: Vector<i32> = items.iter().copied().collect();
        let rebuilt: Vector<i32> = vec.to_array().into_iter().collect();
        prop_assert_eq!(rebuilt, vec);
    }
}

#[test]
fn test_capacity_overflow() {
    let mut vec: Vector<u8> = (0..4).collect();
    assert_panics!(
        {
            vec.reserve(usize::MAX);
        },
        "Reserving past usize::MAX should panic."
    );

    let error = CollectionError::from(CapacityOverflow);
    assert!(error.is_capacity_overflow());
    assert_eq!(error.to_string(), "Capacity overflow!");
    assert!(CapacityOverflow::try_from(error).is_ok());
}
