#![cfg(test)]

use std::collections::HashSet as StdHashSet;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use super::*;
use crate::collections::traits::Set;
use crate::util::alloc::DropCounter;
use crate::util::hash::{Collide, IdentityHasherBuilder};

/// Counts the nodes reachable from every bucket, checking that each one sits in the bucket its
/// stored hash selects.
fn count_nodes<T: Hash + Eq, B: std::hash::BuildHasher>(set: &HashSet<T, B>) -> usize {
    let mut count = 0;
    for (index, bucket) in set.buckets.iter().enumerate() {
        let mut next = bucket.as_deref();
        while let Some(node) = next {
            assert_eq!((node.hash as usize) & (set.cap() - 1), index, "Node in the wrong bucket.");
            count += 1;
            next = node.next.as_deref();
        }
    }
    count
}

#[test]
fn test_add_scenario() {
    let mut set: HashSet<&str> = HashSet::new();
    assert!(set.add("a"));
    assert!(set.add("b"));
    assert!(!set.add("a"), "Adding an element twice should be rejected.");
    assert_eq!(set.len(), 2);
    assert_eq!(count_nodes(&set), 2);
}

#[test]
fn test_lazy_allocation_and_growth() {
    let mut set: HashSet<u32> = HashSet::new();
    assert_eq!(set.cap(), 0, "A new set shouldn't allocate.");
    assert!(!set.contains(&1));
    assert!(!set.remove(&1));

    set.add(0);
    assert_eq!(set.cap(), 16);
    for i in 1..11 {
        set.add(i);
    }
    assert_eq!(set.cap(), 16);
    set.add(11);
    assert_eq!(set.cap(), 32, "The table should double at three quarters full.");
    assert_eq!(count_nodes(&set), 12);
    assert!((0..12).all(|i| set.contains(&i)), "Growing shouldn't lose elements.");

    let mut set: HashSet<u32> = HashSet::with_cap(100);
    let cap = set.cap();
    set.extend(0..100);
    assert_eq!(set.cap(), cap, "with_cap should make room for every element up front.");
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_hasher(IdentityHasherBuilder);
    set.add(Collide::new(0, "zero"));
    set.add(Collide::new(0, "one"));
    set.add(Collide::new(2, "two"));
    set.add(Collide::new(0, "three"));
    set.add(Collide::new(2, "four"));
    set.add(Collide::new(1, "five"));
    assert!(!set.add(Collide::new(0, "one")));

    assert!(set.remove(&Collide::new(0, "one")));
    assert!(set.remove(&Collide::new(2, "four")));
    assert!(!set.remove(&Collide::new(1, "zero")), "Equal hashes alone shouldn't match.");

    assert_eq!(set.len(), 4);
    assert_eq!(count_nodes(&set), 4);
    assert_eq!(
        set.into_iter().map(Collide::value).collect::<Vec<_>>(),
        ["three", "zero", "five", "two"],
        "HashSet should handle hash collisions so that no elements are lost during removal."
    );
}

#[test]
fn test_spread_high_bits() {
    let mut set = HashSet::with_hasher(IdentityHasherBuilder);
    for i in 0..16_u64 {
        set.add(i << 32);
    }

    for bucket in 0..set.cap() {
        assert!(
            set.node_at(bucket, 1).is_none(),
            "Hashes differing only in their high bits should still spread across buckets."
        );
    }
}

#[test]
fn test_borrowed_lookup() {
    let mut set: HashSet<String> = ["apple", "banana", "cherry"].map(String::from).into_iter().collect();
    assert!(set.contains("apple"));
    assert_eq!(set.get("banana").map(String::as_str), Some("banana"));
    assert_eq!(set.take("cherry"), Some(String::from("cherry")));
    assert_eq!(set.take("cherry"), None);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_retain_and_clear() {
    let mut set: HashSet<u32> = (0..50).collect();
    set.retain(|i| i % 5 == 0);
    assert_eq!(set.len(), 10);
    assert_eq!(count_nodes(&set), 10);
    assert!(set.iter().all(|i| i % 5 == 0));

    let cap = set.cap();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.cap(), cap, "Clearing should keep the buckets.");
    assert!(set.add(5));
}

#[test]
fn test_unlink_within_one_chain() {
    let mut set = HashSet::with_hasher(IdentityHasherBuilder);
    for value in ['a', 'b', 'c', 'd', 'e', 'f', 'g'] {
        set.add(Collide::new(0, value));
    }
    let chain = |set: &HashSet<Collide<char>, IdentityHasherBuilder>| {
        set.iter().map(|item| item.clone().value()).collect::<String>()
    };
    assert_eq!(chain(&set), "gfedcba");

    // The head, a middle node and the tail of the chain.
    set.retain(|item| !matches!(item.clone().value(), 'g' | 'd' | 'a'));
    assert_eq!(chain(&set), "fecb", "Kept nodes should stay in chain order.");
    assert_eq!(set.len(), 4);
    assert_eq!(count_nodes(&set), 4);

    assert!(set.remove(&Collide::new(0, 'f')));
    assert!(set.remove(&Collide::new(0, 'c')));
    assert!(set.remove(&Collide::new(0, 'b')));
    assert!(!set.remove(&Collide::new(0, 'b')));
    assert_eq!(chain(&set), "e");

    set.retain(|_| false);
    assert!(set.is_empty());
    assert_eq!(count_nodes(&set), 0);
}

#[derive(Debug, Clone)]
struct Tracked(u32, DropCounter);

impl Hash for Tracked {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Tracked {}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut set: HashSet<Tracked> = HashSet::new();
    for i in 0..20 {
        set.add(Tracked(i, counter.clone()));
    }
    assert!(!set.add(Tracked(3, counter.clone())));
    assert_eq!(counter.take(), 1, "A rejected element should be dropped.");

    set.remove(&Tracked(4, counter.clone()));
    assert_eq!(counter.take(), 2);

    let mut iter = set.into_iter();
    iter.next();
    drop(iter);
    assert_eq!(counter.take(), 19, "Dropping an owned iterator should drop the rest.");
}

#[test]
fn test_set_algebra() {
    let a: HashSet<u8> = [1, 2, 3, 4].into_iter().collect();
    let b: HashSet<u8> = [3, 4, 5].into_iter().collect();

    let sorted = |set: HashSet<u8>| {
        let mut items = set.into_iter().collect::<Vec<_>>();
        items.sort();
        items
    };

    assert_eq!(sorted(&a | &b), [1, 2, 3, 4, 5]);
    assert_eq!(sorted(&a & &b), [3, 4]);
    assert_eq!(sorted(&a ^ &b), [1, 2, 5]);
    assert_eq!(sorted(&a - &b), [1, 2]);
    assert_eq!(a.union(&b).count(), 5);
    assert!(a.is_superset(&(&a & &b)));
    assert!((&a - &b).is_subset(&a));
    assert!(!a.is_subset(&b));
}

#[test]
fn test_equality_and_formatting() {
    let mut set = HashSet::with_hasher(IdentityHasherBuilder);
    set.extend([3_u64, 1, 2]);
    assert_eq!(format!("{set}"), "[1, 2, 3]");
    assert_eq!(
        format!("{set:?}"),
        "HashSet { contents: [1, 2, 3], len: 3, cap: 16, hasher: IdentityHasherBuilder }"
    );

    let mut other = set.clone();
    assert_eq!(set, other);
    other.remove(&2);
    other.add(4);
    assert_ne!(set, other);
}

#[test]
fn test_cursor() {
    let mut set = HashSet::with_hasher(IdentityHasherBuilder);
    for value in ['a', 'b', 'c'] {
        set.add(Collide::new(0, value));
    }
    set.add(Collide::new(1, 'd'));

    // New elements are added to the front of their chain.
    let mut cursor = set.cursor();
    assert_eq!(cursor.next(&set).map(|item| item.cloned().map(Collide::value)), Ok(Some('c')));
    assert_eq!(cursor.next(&set).map(|item| item.cloned().map(Collide::value)), Ok(Some('b')));
    assert_eq!(cursor.remove(&mut set).map(Collide::value), Ok('b'));
    assert!(cursor.remove(&mut set).is_err(), "Removing twice should fail.");
    assert_eq!(cursor.next(&set).map(|item| item.cloned().map(Collide::value)), Ok(Some('a')));
    assert_eq!(cursor.next(&set).map(|item| item.cloned().map(Collide::value)), Ok(Some('d')));
    assert_eq!(cursor.next(&set), Ok(None));
    assert_eq!(set.len(), 3);

    let mut cursor = set.cursor();
    set.add(Collide::new(2, 'e'));
    assert!(cursor.next(&set).is_err(), "An add outside the cursor should be detected.");

    let mut cursor = set.cursor();
    while cursor.next(&set).expect("no outside modification").is_some() {
        cursor.remove(&mut set).expect("an element was yielded");
    }
    assert!(set.is_empty());
}

proptest! {
    #[test]
    fn prop_matches_std_hash_set(ops in prop::collection::vec((any::<bool>(), 0_u16..64), 0..300)) {
        let mut set: HashSet<u16> = HashSet::new();
        let mut model = StdHashSet::new();

        for (add, value) in ops {
            if add {
                prop_assert_eq!(set.add(value), model.insert(value));
            } else {
                prop_assert_eq!(set.remove(&value), model.remove(&value));
            }
            prop_assert_eq!(set.len(), model.len());
        }

        prop_assert_eq!(count_nodes(&set), set.len());
        let mut items = set.iter().copied().collect::<Vec<_>>();
        items.sort();
        items.dedup();
        prop_assert_eq!(items.len(), set.len(), "No two nodes should hold equal elements.");
        prop_assert!(model.iter().all(|value| set.contains(value)));
    }

    #[test]
    fn prop_to_array_round_trip(values in prop::collection::vec(any::<u32>(), 0..100)) {
        let set: HashSet<u32> = values.into_iter().collect();
        let rebuilt: HashSet<u32> = set.to_array().into_iter().collect();
        prop_assert_eq!(set, rebuilt);
    }
}
