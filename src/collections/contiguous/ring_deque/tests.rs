#![cfg(test)]

use std::collections::VecDeque;

use proptest::prelude::*;

use super::*;
use crate::collections::traits::Deque;
use crate::util::alloc::DropCounter;
use crate::util::error::EmptyContainer;
use crate::util::panic::assert_panics;

#[test]
fn test_push_pop_scenario() {
    let mut deque = RingDeque::new();
    deque.push_back(1);
    deque.push_back(2);
    deque.push_front(0);

    assert_eq!(deque.pop_front(), Some(0));
    assert_eq!(deque.pop_front(), Some(1));
    assert_eq!(deque.pop_front(), Some(2));
    assert_eq!(deque.pop_front(), None, "An empty deque should return None, not panic.");
    assert_eq!(deque.pop_back(), None);
}

#[test]
fn test_empty_accessors() {
    let mut deque: RingDeque<u8> = RingDeque::new();
    assert_eq!(deque.front(), None);
    assert_eq!(deque.back(), None);
    assert_eq!(Deque::first(&deque), Err(EmptyContainer));
    assert_eq!(Deque::remove_back(&mut deque), Err(EmptyContainer));
    assert_panics!({ deque[0]; });
}

#[test]
fn test_wrapping_growth() {
    let mut deque = RingDeque::new();
    for i in 0..6 {
        deque.push_back(i);
    }
    assert_eq!(deque.cap(), 8, "The first allocation should hold 8 elements.");

    // Move head towards the end of the buffer, so that the contents wrap.
    for _ in 0..4 {
        deque.pop_front();
    }
    for i in 6..12 {
        deque.push_back(i);
    }
    assert_eq!(deque.cap(), 8);
    let (front, back) = deque.as_slices();
    assert!(!back.is_empty(), "The contents should wrap around the end of the buffer.");
    assert_eq!(front.len() + back.len(), 8);

    deque.push_back(12);
    assert_eq!(deque.cap(), 16, "A full buffer should double.");
    assert_eq!(deque.head, 0, "Growing should move the contents to the front of the buffer.");
    assert_eq!(deque.as_slices().0, &(4..=12).collect::<Vec<_>>()[..]);

    deque.push_front(3);
    assert_eq!(deque.front(), Some(&3));
    assert_eq!(deque.back(), Some(&12));
    assert_eq!(deque.iter().rev().next(), Some(&12), "Reverse iteration should start at the back.");
}

#[test]
fn test_remove_shifts_shorter_side() {
    let mut deque: RingDeque<u8> = (0..8).collect();
    let head = deque.head;

    assert_eq!(deque.remove(1), 1);
    assert_eq!(deque.head, (head + 1) & 7, "Removing near the front should move the front.");
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 2, 3, 4, 5, 6, 7]);

    let head = deque.head;
    assert_eq!(deque.remove(5), 6);
    assert_eq!(deque.head, head, "Removing near the back shouldn't move the front.");
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 2, 3, 4, 5, 7]);

    assert!(deque.try_remove(6).is_err());
    assert_panics!({ deque.remove(6); });
}

#[test]
fn test_occurrences_and_retain() {
    let mut deque: RingDeque<char> = "abcabc".chars().collect();

    assert!(deque.remove_first_occurrence(&'b'));
    assert!(deque.remove_last_occurrence(&'a'));
    assert!(!deque.remove_last_occurrence(&'z'));
    assert_eq!(deque.to_string(), "[a, c, b, c]");

    deque.retain(|item| *item != 'c');
    assert_eq!(deque.to_string(), "[a, b]");
    assert!(deque.contains(&'a'));
    assert_eq!(&*deque.to_array(), &['a', 'b']);
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut deque = RingDeque::new();
    for _ in 0..5 {
        deque.push_back(counter.clone());
        deque.push_front(counter.clone());
    }

    deque.pop_back();
    assert_eq!(counter.take(), 1);
    deque.clear();
    assert_eq!(counter.take(), 9, "Clearing should drop every element.");

    for _ in 0..5 {
        deque.push_front(counter.clone());
    }
    drop(deque);
    assert_eq!(counter.take(), 5);
}

#[test]
fn test_cursor() {
    let mut deque: RingDeque<u8> = (0..10).collect();
    let mut cursor = deque.cursor();

    while let Some(item) = cursor.next(&deque).expect("no outside modification") {
        if item % 3 != 0 {
            cursor.remove(&mut deque).expect("an element was yielded");
        }
    }
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 3, 6, 9]);

    let mut cursor = deque.cursor();
    assert_eq!(cursor.next(&deque), Ok(Some(&0)));
    assert_eq!(cursor.remove(&mut deque), Ok(0));
    assert!(
        cursor.remove(&mut deque).is_err_and(|err| err.is_invalid_argument()),
        "Removing twice should fail."
    );
    assert_eq!(cursor.next(&deque), Ok(Some(&3)), "The cursor should continue after a removal.");

    let mut cursor = deque.cursor();
    deque.pop_back();
    assert!(cursor.next(&deque).is_err());
}

#[test]
fn test_cursor_over_wrapped_buffer() {
    let mut deque = RingDeque::with_cap(8);
    deque.extend(0..6);
    for _ in 0..4 {
        deque.pop_front();
    }
    deque.extend(6..12);
    assert_eq!(deque.cap(), 8);
    assert!(!deque.as_slices().1.is_empty(), "The contents should wrap.");

    let mut cursor = deque.cursor();
    while let Some(item) = cursor.next(&deque).expect("no outside modification") {
        if item % 3 == 0 {
            cursor.remove(&mut deque).expect("an element was yielded");
        }
    }
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [4, 5, 7, 8, 10, 11]);

    let mut cursor = deque.cursor();
    deque.push_front(3);
    assert!(cursor.next(&deque).is_err(), "A push outside the cursor should be detected.");
}

#[derive(Debug)]
struct Opaque(u8);

#[test]
fn test_debug_without_clone() {
    let mut deque = RingDeque::new();
    deque.push_back(Opaque(1));
    deque.push_front(Opaque(0));

    let debug = format!("{deque:?}");
    assert!(debug.starts_with("RingDeque { contents: [Opaque(0), Opaque(1)]"), "{debug}");
    assert!(debug.ends_with("len: 2, cap: 8 }"), "{debug}");

    let iter = deque.iter();
    assert_eq!(iter.clone().count(), 2, "Borrowed iterators clone without cloning elements.");
    assert_eq!(iter.len(), 2);
}

#[derive(Debug, Clone)]
enum Op {
    PushFront(i16),
    PushBack(i16),
    PopFront,
    PopBack,
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i16>().prop_map(Op::PushFront),
        any::<i16>().prop_map(Op::PushBack),
        Just(Op::PopFront),
        Just(Op::PopBack),
        any::<usize>().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_matches_std_vec_deque(ops in prop::collection::vec(op_strategy(), 0..300)) {
        let mut deque = RingDeque::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::PushFront(value) => {
                    deque.push_front(value);
                    model.push_front(value);
                },
                Op::PushBack(value) => {
                    deque.push_back(value);
                    model.push_back(value);
                },
                Op::PopFront => {
                    prop_assert_eq!(deque.pop_front(), model.pop_front());
                },
                Op::PopBack => {
                    prop_assert_eq!(deque.pop_back(), model.pop_back());
                },
                Op::Remove(index) => {
                    let index = index % (model.len() + 1);
                    prop_assert_eq!(deque.try_remove(index).ok(), model.remove(index));
                },
            }
            prop_assert!(deque.cap() == 0 || deque.cap().is_power_of_two());
            prop_assert_eq!(deque.len(), model.len());
        }

        prop_assert!(deque.iter().eq(model.iter()));
        prop_assert!(deque.iter().rev().eq(model.iter().rev()));
    }
}
