#![cfg(test)]

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::*;
use crate::collections::traits::{Container, OrderedMap};
use crate::util::alloc::DropCounter;
use crate::util::error::EmptyContainer;

/// Checks the ordering, stored heights and balance of every node below `node`, returning the
/// height of the subtree.
fn verify_avl<K: Ord, V>(node: Option<&Node<K, V>>, low: Option<&K>, high: Option<&K>) -> i32 {
    let Some(node) = node else {
        return 0;
    };

    assert!(low.is_none_or(|low| *low < node.key), "Key below its lower bound.");
    assert!(high.is_none_or(|high| node.key < *high), "Key above its upper bound.");

    let left = verify_avl(node.left.node(), low, Some(&node.key));
    let right = verify_avl(node.right.node(), Some(&node.key), high);
    assert_eq!(node.height, 1 + left.max(right), "Stale height.");
    assert!((left - right).abs() <= 1, "Unbalanced node.");
    node.height
}

fn verify<K: Ord, V>(map: &AvlTreeMap<K, V>) {
    verify_avl(map.root.node(), None, None);
    assert_eq!(map.iter().count(), map.len());
}

#[test]
fn test_insertion_rotates() {
    let mut map = AvlTreeMap::new();
    map.insert(10, "ten");
    map.insert(20, "twenty");
    assert_eq!(map.root_key(), Some(&10));

    map.insert(30, "thirty");
    assert_eq!(map.root_key(), Some(&20), "Inserting 30 should rotate 20 up to the root.");

    for key in [40, 50, 25] {
        map.insert(key, "other");
        verify(&map);
    }
    assert_eq!(map.root_key(), Some(&30));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [10, 20, 25, 30, 40, 50]);
    assert_eq!(map.len(), 6);
}

#[test]
fn test_insert_replaces() {
    let mut map = AvlTreeMap::new();
    assert_eq!(map.insert("a", 1), None);
    assert_eq!(map.insert("a", 2), Some(1));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("a"), Some(&2));

    *map.get_mut("a").expect("key is present") += 5;
    assert_eq!(map.get("a"), Some(&7));
    assert_eq!(map.get_mut("b"), None);
}

#[test]
fn test_remove() {
    let mut map: AvlTreeMap<u32, u32> = (0..32).map(|i| (i, i * 10)).collect();
    verify(&map);

    // With 32 entries the root has two children.
    let root = *map.root_key().expect("map isn't empty");
    assert_eq!(map.remove(&root), Some(root * 10));
    verify(&map);
    assert!(!map.contains_key(&root));

    for key in (0..32).step_by(3) {
        map.remove(&key);
        verify(&map);
    }
    assert_eq!(map.remove(&0), None);
    assert_eq!(map.len(), 32 - 1 - 11 + usize::from(root % 3 == 0));
    assert!(map.keys().all(|key| key % 3 != 0 && *key != root));
}

#[test]
fn test_navigation() {
    let map: AvlTreeMap<i32, ()> = [10, 20, 30, 40].map(|key| (key, ())).into_iter().collect();

    assert_eq!(map.floor_key(&25), Some(&20));
    assert_eq!(map.floor_key(&20), Some(&20));
    assert_eq!(map.floor_key(&5), None);
    assert_eq!(map.ceiling_key(&25), Some(&30));
    assert_eq!(map.ceiling_key(&30), Some(&30));
    assert_eq!(map.ceiling_key(&45), None);
    assert_eq!(map.lower_key(&20), Some(&10));
    assert_eq!(map.lower_key(&10), None);
    assert_eq!(map.higher_key(&20), Some(&30));
    assert_eq!(map.higher_key(&40), None);

    assert_eq!(map.first_key(), Ok(&10));
    assert_eq!(map.last_key(), Ok(&40));
    assert_eq!(AvlTreeMap::<i32, ()>::new().first_key(), Err(EmptyContainer));
    assert_eq!(AvlTreeMap::<i32, ()>::new().last_key(), Err(EmptyContainer));
}

#[test]
fn test_pop_and_sub_maps() {
    let mut map: AvlTreeMap<u8, char> = (1..=8).zip('a'..).collect();

    assert_eq!(map.pop_first(), Some((1, 'a')));
    assert_eq!(map.pop_last(), Some((8, 'h')));
    verify(&map);

    let head = map.head_map(&5);
    let tail = map.tail_map(&5);
    verify(&head);
    verify(&tail);
    assert_eq!(head.to_string(), "{2=b, 3=c, 4=d}");
    assert_eq!(tail.to_string(), "{5=e, 6=f, 7=g}");
    assert_eq!(map.len(), 6, "Sub maps should be copies.");

    assert!(map.contains_value(&'c'));
    assert!(!map.contains_value(&'a'));
    assert_eq!(map.first_entry(), Some((&2, &'b')));
    assert_eq!(map.last_entry(), Some((&7, &'g')));
}

#[test]
fn test_iteration() {
    let map: AvlTreeMap<u8, u8> = [5, 1, 4, 2, 3].map(|key| (key, key * 2)).into_iter().collect();

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_eq!(map.values().rev().copied().collect::<Vec<_>>(), [10, 8, 6, 4, 2]);

    let mut iter = map.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some((&1, &2)));
    assert_eq!(iter.next_back(), Some((&5, &10)));
    assert_eq!(iter.clone().count(), 3);
    assert_eq!(iter.map(|(key, _)| *key).collect::<Vec<_>>(), [2, 3, 4]);

    let mut owned = map.clone().into_iter();
    assert_eq!(owned.next_back(), Some((5, 10)));
    assert_eq!(owned.collect::<Vec<_>>(), [(1, 2), (2, 4), (3, 6), (4, 8)]);
    assert_eq!((&map).into_iter().count(), 5);
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut map = AvlTreeMap::new();
    for key in 0..10 {
        map.insert(key, counter.clone());
    }

    drop(map.insert(3, counter.clone()));
    assert_eq!(counter.take(), 1, "A replaced value should be handed back.");

    drop(map.remove(&4));
    drop(map.pop_first());
    assert_eq!(counter.take(), 2);

    map.clear();
    assert_eq!(counter.take(), 8);
    assert!(map.is_empty());
}

#[test]
fn test_equality_and_formatting() {
    let map: AvlTreeMap<u8, char> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    let other: AvlTreeMap<u8, char> = [(3, 'c'), (2, 'b'), (1, 'a')].into_iter().collect();

    assert_eq!(map, other, "Equality shouldn't depend on insertion order.");
    assert_ne!(map, map.head_map(&3));
    assert_eq!(map.to_string(), "{1=a, 2=b, 3=c}");
    assert_eq!(AvlTreeMap::<u8, u8>::new().to_string(), "{}");

    let debug = format!("{map:?}");
    assert!(debug.starts_with("AvlTreeMap { nodes: \n"));
    assert!(debug.contains("(2: 'b') h=2"));
    assert!(debug.contains("┌    (1: 'a') h=1"));
    assert!(debug.contains("└    (3: 'c') h=1"));
    assert!(debug.ends_with("len: 3 }"));
}

#[test]
fn test_ordered_map_trait() {
    fn exercise<M: OrderedMap<u32, &'static str>>(map: &mut M) {
        assert_eq!(map.put(2, "two"), None);
        assert_eq!(map.put(1, "one"), None);
        assert_eq!(map.put(2, "deux"), Some("two"));
        assert_eq!(map.get(&2), Some(&"deux"));
        assert_eq!(map.floor_key(&5), Some(&2));
        assert_eq!(map.higher_key(&1), Some(&2));
        assert!(map.contains(&1));
        assert_eq!(map.remove(&1), Some("one"));
        assert_eq!(map.first_key(), Ok(&2));
        assert_eq!(map.len(), 1);
        map.clear();
        assert!(map.is_empty());
    }

    exercise(&mut AvlTreeMap::new());
}

#[test]
fn test_cursor() {
    let mut map: AvlTreeMap<u32, u32> = (0..20).map(|i| (i, i)).collect();
    let mut cursor = map.cursor();

    assert!(cursor.remove(&mut map).is_err_and(|err| err.is_invalid_argument()));
    while let Some((key, _)) = cursor.next(&map).expect("no outside modification") {
        if key % 4 != 0 {
            cursor.remove(&mut map).expect("an entry was yielded");
            verify(&map);
        }
    }
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [0, 4, 8, 12, 16]);

    let mut cursor = map.cursor();
    assert_eq!(cursor.next(&map), Ok(Some((&0, &0))));
    map.insert(1, 1);
    assert!(cursor.next(&map).is_err(), "An insertion outside the cursor should be detected.");

    let mut cursor = map.cursor();
    map.insert(1, 100);
    assert_eq!(
        cursor.next(&map),
        Ok(Some((&0, &0))),
        "Replacing a value isn't a structural change."
    );
}

proptest! {
    #[test]
    fn prop_matches_btree_map(ops in prop::collection::vec((any::<bool>(), 0_u16..100), 0..300)) {
        let mut map = AvlTreeMap::new();
        let mut model = BTreeMap::new();

        for (insert, key) in ops {
            if insert {
                prop_assert_eq!(map.insert(key, key), model.insert(key, key));
            } else {
                prop_assert_eq!(map.remove(&key), model.remove(&key));
            }
            verify(&map);
            prop_assert_eq!(map.len(), model.len());
        }

        prop_assert!(map.iter().eq(model.iter()));
    }

    #[test]
    fn prop_to_array_round_trip(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let map: AvlTreeMap<i32, ()> = values.into_iter().map(|key| (key, ())).collect();
        let rebuilt: AvlTreeMap<i32, ()> = map.clone().into_iter().collect();
        verify(&rebuilt);
        prop_assert_eq!(map, rebuilt);
    }
}
