#![cfg(test)]

use std::hash::{BuildHasher, Hash};

use proptest::prelude::*;

use super::*;
use crate::collections::traits::Set;
use crate::util::error::EmptyContainer;
use crate::util::hash::{Collide, IdentityHasherBuilder};

/// Checks that the bucket chains and the insertion order chain hold the same entries, and that
/// every entry in the order chain links back to its predecessor.
fn verify_chains<T: Hash + Eq, B: BuildHasher>(set: &LinkedHashSet<T, B>) {
    let mut in_buckets = 0;
    for (index, head) in set.buckets.iter().enumerate() {
        let mut next = *head;
        while let Some(id) = next {
            let entry = &set.entries[id];
            assert_eq!((entry.hash as usize) & (set.cap() - 1), index, "Entry in the wrong bucket.");
            in_buckets += 1;
            next = entry.next_in_bucket;
        }
    }

    let mut in_order = 0;
    let mut prev = None;
    let mut next = set.head;
    while let Some(id) = next {
        let entry = &set.entries[id];
        assert_eq!(entry.before, prev, "Entry {id} should link back to its predecessor.");
        prev = Some(id);
        next = entry.after;
        in_order += 1;
    }

    assert_eq!(prev, set.tail);
    assert_eq!(in_buckets, set.len());
    assert_eq!(in_order, set.len());
}

#[test]
fn test_insertion_order() {
    let mut set: LinkedHashSet<&str> = LinkedHashSet::new();
    for word in ["pear", "fig", "apple", "fig", "kiwi"] {
        set.add(word);
    }
    verify_chains(&set);

    assert_eq!(set.len(), 4);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), ["pear", "fig", "apple", "kiwi"]);
    assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), ["kiwi", "apple", "fig", "pear"]);
    assert_eq!(set.first(), Ok(&"pear"));
    assert_eq!(set.last(), Ok(&"kiwi"));

    assert!(set.remove("fig"));
    set.add("fig");
    verify_chains(&set);
    assert_eq!(
        set.iter().copied().collect::<Vec<_>>(),
        ["pear", "apple", "kiwi", "fig"],
        "An element added again after removal should move to the end."
    );
}

#[test]
fn test_empty() {
    let mut set: LinkedHashSet<u8> = LinkedHashSet::new();
    assert_eq!(set.cap(), 0);
    assert_eq!(set.first(), Err(EmptyContainer));
    assert_eq!(set.last(), Err(EmptyContainer));
    assert_eq!(set.poll_first(), None);
    assert!(!set.contains(&0));
    assert_eq!(set.take(&0), None);
    assert_eq!(set.to_string(), "[]");
}

#[test]
fn test_growth_keeps_order() {
    let mut set: LinkedHashSet<u32> = LinkedHashSet::new();
    for i in (0..100).rev() {
        set.add(i);
    }
    verify_chains(&set);

    assert_eq!(set.cap(), 256);
    assert!(set.iter().copied().eq((0..100).rev()), "Growing shouldn't change the order.");
}

#[test]
fn test_collisions() {
    let mut set = LinkedHashSet::with_hasher(IdentityHasherBuilder);
    for (hash, value) in [(0, 'a'), (1, 'b'), (0, 'c'), (0, 'd'), (1, 'e')] {
        set.add(Collide::new(hash, value));
    }

    assert!(set.remove(&Collide::new(0, 'c')));
    assert!(set.remove(&Collide::new(0, 'd')));
    assert!(!set.remove(&Collide::new(0, 'b')));
    verify_chains(&set);

    assert_eq!(set.into_iter().map(Collide::value).collect::<String>(), "abe");
}

#[test]
fn test_poll_and_retain() {
    let mut set: LinkedHashSet<u32> = (1..=10).collect();
    assert_eq!(set.poll_first(), Some(1));
    assert_eq!(set.poll_last(), Some(10));

    set.retain(|i| i % 2 == 0);
    verify_chains(&set);
    assert_eq!(set.to_array().iter().copied().collect::<Vec<_>>(), [2, 4, 6, 8]);

    set.clear();
    verify_chains(&set);
    assert!(set.is_empty());
    assert!(set.add(3));
    assert_eq!(set.first(), Ok(&3));
}

#[test]
fn test_equality_and_formatting() {
    let set: LinkedHashSet<u8> = [3, 1, 2].into_iter().collect();
    let reordered: LinkedHashSet<u8> = [1, 2, 3].into_iter().collect();

    assert_eq!(set, reordered, "Equality shouldn't depend on insertion order.");
    assert_eq!(format!("{set}"), "[3, 1, 2]");
    assert_eq!(format!("{set:?}"), "LinkedHashSet { contents: [3, 1, 2], len: 3, cap: 16 }");
    assert_eq!(set.clone().to_string(), "[3, 1, 2]");

    let other: LinkedHashSet<u8> = [3, 1, 5].into_iter().collect();
    assert_eq!(set.intersection(&other).copied().collect::<Vec<_>>(), [3, 1]);
    assert_eq!(set.difference(&other).copied().collect::<Vec<_>>(), [2]);
}

#[test]
fn test_cursor() {
    let mut set: LinkedHashSet<u8> = (0..8).collect();
    let mut cursor = set.cursor();

    while let Some(item) = cursor.next(&set).expect("no outside modification") {
        if item % 2 == 1 {
            cursor.remove(&mut set).expect("an element was yielded");
        }
    }
    verify_chains(&set);
    assert_eq!(set.to_string(), "[0, 2, 4, 6]");

    let mut cursor = set.cursor();
    assert!(cursor.remove(&mut set).is_err_and(|err| err.is_invalid_argument()));
    set.add(9);
    assert!(cursor.next(&set).is_err());
}

proptest! {
    #[test]
    fn prop_matches_insertion_order_model(ops in prop::collection::vec((any::<bool>(), 0_u8..40), 0..300)) {
        let mut set: LinkedHashSet<u8> = LinkedHashSet::new();
        let mut model: Vec<u8> = Vec::new();

        for (add, value) in ops {
            if add {
                let added = set.add(value);
                prop_assert_eq!(added, !model.contains(&value));
                if added {
                    model.push(value);
                }
            } else {
                let position = model.iter().position(|other| *other == value);
                prop_assert_eq!(set.remove(&value), position.is_some());
                if let Some(position) = position {
                    model.remove(position);
                }
            }
        }

        verify_chains(&set);
        prop_assert!(set.iter().eq(model.iter()));
    }

    #[test]
    fn prop_to_array_round_trip(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let set: LinkedHashSet<i32> = values.into_iter().collect();
        let rebuilt: LinkedHashSet<i32> = set.to_array().into_iter().collect();
        prop_assert!(set.iter().eq(rebuilt.iter()), "The round trip should keep the order too.");
    }
}
