#![cfg(test)]

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::*;
use crate::collections::traits::OrderedMap;
use crate::util::alloc::DropCounter;

/// Checks the ordering and coloring of every node below `node`, returning the number of black
/// links on every path from it down to an empty branch.
fn black_height<K: Ord, V>(node: Option<&Node<K, V>>, low: Option<&K>, high: Option<&K>) -> usize {
    let Some(node) = node else {
        return 0;
    };

    assert!(low.is_none_or(|low| *low < node.key), "Key below its lower bound.");
    assert!(high.is_none_or(|high| node.key < *high), "Key above its upper bound.");
    assert!(!node.right.is_red(), "Red links should lean left.");
    if node.color.is_red() {
        assert!(!node.left.is_red(), "Two red links in a row.");
    }

    let left = black_height(node.left.node(), low, Some(&node.key));
    let right = black_height(node.right.node(), Some(&node.key), high);
    assert_eq!(left, right, "Every path should cross the same number of black links.");
    left + usize::from(node.color.is_black())
}

fn verify<K: Ord, V>(map: &RbTreeMap<K, V>) -> usize {
    assert!(!map.root.is_red(), "The root should be black.");
    assert_eq!(map.iter().count(), map.len());
    black_height(map.root.node(), None, None)
}

#[test]
fn test_ascending_insertions() {
    let mut map = RbTreeMap::new();
    for key in 0..1000 {
        assert_eq!(map.insert(key, key.to_string()), None);
    }

    let height = verify(&map);
    assert!(height <= 10, "Black height {height} is too large for 1000 entries.");
    assert!(map.keys().copied().eq(0..1000));
    assert_eq!(map.get(&500).map(String::as_str), Some("500"));
}

#[test]
fn test_remove() {
    let mut map: RbTreeMap<u32, u32> = (0..64).map(|i| (i, i)).collect();

    for key in (0..64).filter(|key| key % 3 != 1) {
        assert_eq!(map.remove(&key), Some(key));
        verify(&map);
    }
    assert_eq!(map.remove(&0), None, "A missing key shouldn't reshape the tree.");
    verify(&map);

    assert!(map.keys().all(|key| key % 3 == 1));
    assert_eq!(map.len(), 21);
    assert!(map.contains_key(&31));
    assert!(!map.contains_key(&30));
}

#[test]
fn test_pop_from_both_ends() {
    let mut map: RbTreeMap<u8, char> = (0..26).zip('a'..).collect();

    assert_eq!(map.pop_first(), Some((0, 'a')));
    assert_eq!(map.pop_last(), Some((25, 'z')));
    verify(&map);

    while map.len() > 2 {
        map.pop_first();
        verify(&map);
        map.pop_last();
        verify(&map);
    }
    assert_eq!(map.to_string(), "{12=m, 13=n}");
    assert_eq!(map.first_entry(), Some((&12, &'m')));
    assert_eq!(map.last_key(), Ok(&13));

    map.pop_last();
    map.pop_last();
    assert_eq!(map.pop_last(), None);
    assert!(map.first_key().is_err());
}

#[test]
fn test_navigation_and_sub_maps() {
    let map: RbTreeMap<i32, i32> = (0..10).map(|i| (i * 10, i)).collect();

    assert_eq!(map.floor_key(&35), Some(&30));
    assert_eq!(map.ceiling_key(&35), Some(&40));
    assert_eq!(map.lower_key(&30), Some(&20));
    assert_eq!(map.higher_key(&30), Some(&40));
    assert_eq!(map.lower_key(&0), None);
    assert_eq!(map.higher_key(&90), None);

    let head = map.head_map(&30);
    let tail = map.tail_map(&70);
    verify(&head);
    verify(&tail);
    assert_eq!(head.keys().copied().collect::<Vec<_>>(), [0, 10, 20]);
    assert_eq!(tail.keys().copied().collect::<Vec<_>>(), [70, 80, 90]);
    assert!(map.contains_value(&9));
    assert!(!map.contains_value(&10));
}

#[test]
fn test_get_mut_and_drop() {
    let counter = DropCounter::new();
    let mut map = RbTreeMap::new();
    for key in ["b", "a", "d", "c"] {
        map.insert(String::from(key), (0, counter.clone()));
    }

    map.get_mut("c").expect("key is present").0 += 1;
    assert_eq!(map.get("c").map(|(count, _)| *count), Some(1));

    drop(map.remove("a"));
    assert_eq!(counter.take(), 1);
    drop(map);
    assert_eq!(counter.take(), 3, "Dropping the map should drop every value.");
}

#[test]
fn test_equality_and_formatting() {
    let mut map: RbTreeMap<u8, u8> = RbTreeMap::new();
    map.insert(1, 10);
    map.insert(2, 20);

    assert_eq!(map.to_string(), "{1=10, 2=20}");
    let debug = format!("{map:?}");
    assert!(debug.contains("(2: 20) Black"), "{debug}");
    assert!(debug.contains("┌    (1: 10) Red"), "{debug}");

    let other: RbTreeMap<u8, u8> = [(2, 20), (1, 10)].into_iter().collect();
    assert_eq!(map, other);
    assert_eq!(map.clone(), map);
}

#[test]
fn test_cursor() {
    let mut map: RbTreeMap<u16, ()> = (0..=50).map(|key| (key, ())).collect();
    let mut cursor = map.cursor();

    while let Some((key, _)) = cursor.next(&map).expect("no outside modification") {
        if key % 10 != 0 {
            cursor.remove(&mut map).expect("an entry was yielded");
            verify(&map);
        }
    }
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [0, 10, 20, 30, 40, 50]);
    assert_eq!(
        cursor.remove(&mut map),
        Ok((50, ())),
        "The last yielded entry can still be removed after the end."
    );
    assert!(cursor.remove(&mut map).is_err());

    let mut cursor = map.cursor();
    map.pop_first();
    assert!(cursor.next(&map).is_err_and(|err| err.found == err.expected + 1));
}

proptest! {
    #[test]
    fn prop_matches_btree_map(ops in prop::collection::vec((0_u8..3, 0_u16..100), 0..300)) {
        let mut map = RbTreeMap::new();
        let mut model = BTreeMap::new();

        for (op, key) in ops {
            match op {
                0 => {
                    prop_assert_eq!(map.remove(&key), model.remove(&key));
                },
                1 => {
                    prop_assert_eq!(map.pop_first(), model.pop_first());
                },
                _ => {
                    prop_assert_eq!(map.insert(key, key), model.insert(key, key));
                },
            }
            verify(&map);
            prop_assert_eq!(map.len(), model.len());
        }

        prop_assert!(map.iter().eq(model.iter()));
    }

    #[test]
    fn prop_ordered_map_matches_btree_map(keys in prop::collection::vec(0_i16..500, 1..100), probe in 0_i16..500) {
        let mut map: RbTreeMap<i16, ()> = RbTreeMap::new();
        let mut model = BTreeMap::new();
        for key in keys {
            OrderedMap::put(&mut map, key, ());
            model.insert(key, ());
        }

        prop_assert_eq!(OrderedMap::floor_key(&mut map, &probe), model.range(..=probe).next_back().map(|(key, _)| key));
        prop_assert_eq!(OrderedMap::ceiling_key(&mut map, &probe), model.range(probe..).next().map(|(key, _)| key));
        prop_assert_eq!(OrderedMap::lower_key(&mut map, &probe), model.range(..probe).next_back().map(|(key, _)| key));
        prop_assert_eq!(OrderedMap::higher_key(&mut map, &probe), model.range(probe + 1..).next().map(|(key, _)| key));
    }
}
