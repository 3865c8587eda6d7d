#![cfg(test)]

use std::cmp::Ordering;

use proptest::prelude::*;

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::traits::{Comparator, PriorityQueue, ReverseOrder};
use crate::util::error::EmptyContainer;

/// Checks that no element has a higher priority than its parent.
fn is_heap<T, C: Comparator<T>>(heap: &BinaryHeap<T, C>) -> bool {
    let items = heap.as_slice();
    (1..items.len()).all(|index| {
        heap.comparator().compare(&items[(index - 1) / 2], &items[index]) != Ordering::Greater
    })
}

#[test]
fn test_offer_poll_scenario() {
    let mut heap = BinaryHeap::new();
    heap.offer(5);
    heap.offer(3);
    heap.offer(8);

    assert_eq!(heap.poll(), Some(3));
    assert_eq!(heap.poll(), Some(5));
    assert_eq!(heap.poll(), Some(8));
    assert_eq!(heap.poll(), None, "Polling an empty heap should return None.");
}

#[test]
fn test_empty_accessors() {
    let heap: BinaryHeap<u8> = BinaryHeap::new();
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.element(), Err(EmptyContainer));
    assert_eq!(PriorityQueue::element(&heap), Err(EmptyContainer));
}

#[test]
fn test_comparators() {
    let mut max_heap = BinaryHeap::with_comparator(ReverseOrder);
    max_heap.extend([4, 9, 1, 7]);
    assert_eq!(max_heap.peek(), Some(&9), "A reversed heap should yield the maximum first.");

    let mut by_len = BinaryHeap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    by_len.extend(["ccc", "a", "bb"]);
    assert_eq!(by_len.poll(), Some("a"));
    assert_eq!(by_len.poll(), Some("bb"));
}

#[test]
fn test_remove_repairs_both_directions() {
    let mut heap: BinaryHeap<u32> = BinaryHeap::new();
    heap.extend([1, 10, 2, 11, 12, 3, 4]);
    assert!(is_heap(&heap));

    // The last element (4) replaces 11 and has to move up past 10.
    assert!(heap.remove(&11));
    assert!(is_heap(&heap), "Removal should restore the heap order upwards.");

    assert!(heap.remove(&1));
    assert!(is_heap(&heap), "Removal should restore the heap order downwards.");

    assert!(!heap.remove(&100));
    assert_eq!(heap.len(), 5);
    assert_eq!(&*heap.into_sorted_vector(), &[2, 3, 4, 10, 12]);
}

#[test]
fn test_snapshots() {
    let heap: BinaryHeap<i32> = [5, -1, 3, 3, 0].into_iter().collect();
    assert!(is_heap(&heap));

    assert_eq!(
        heap.sorted().iter().map(|item| **item).collect::<Vec<_>>(),
        [-1, 0, 3, 3, 5],
        "A sorted snapshot should be in priority order."
    );
    assert_eq!(heap.len(), 5, "Taking a snapshot shouldn't consume the heap.");
    assert_eq!(heap.to_string(), "[-1, 0, 3, 3, 5]");
    assert_eq!(heap.to_array().size(), 5);
}

#[test]
fn test_retain() {
    let mut heap = BinaryHeap::from_vector((0..20).collect::<Vector<_>>(), ReverseOrder);
    heap.retain(|item| item % 2 == 0);

    assert!(is_heap(&heap));
    assert_eq!(heap.len(), 10);
    assert_eq!(heap.peek(), Some(&18));
}

#[test]
fn test_cursor() {
    let mut heap: BinaryHeap<u8> = (0..5).collect();
    let mut cursor = heap.cursor();

    let mut visited = 0;
    while cursor.next(&heap).expect("no outside modification").is_some() {
        visited += 1;
    }
    assert_eq!(visited, 5);

    let mut cursor = heap.cursor();
    heap.poll();
    assert!(cursor.next(&heap).is_err(), "Polling should invalidate the cursor.");
}

proptest! {
    #[test]
    fn prop_heap_order(
        items in prop::collection::vec(any::<i32>(), 0..200),
        polls in 0_usize..200,
    ) {
        let mut heap = BinaryHeap::new();
        for item in &items {
            heap.offer(*item);
            prop_assert!(is_heap(&heap));
        }

        let mut sorted = items.clone();
        sorted.sort();
        for expected in sorted.iter().take(polls) {
            prop_assert_eq!(heap.poll(), Some(*expected));
            prop_assert!(is_heap(&heap));
        }
        prop_assert_eq!(heap.len(), items.len().saturating_sub(polls));
    }

    #[test]
    fn prop_from_vector_heapifies(items in prop::collection::vec(any::<i16>(), 0..200)) {
        let heap = BinaryHeap::from_vector(items.iter().copied().collect(), ReverseOrder);
        prop_assert!(is_heap(&heap));
        prop_assert_eq!(heap.len(), items.len());
    }
}
