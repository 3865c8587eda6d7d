#![cfg(test)]

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::panic::assert_panics;

#[test]
fn test_slot_reuse() {
    let mut arena = Arena::new();
    let a = arena.insert('a');
    let b = arena.insert('b');
    let c = arena.insert('c');
    assert_eq!((a, b, c), (0, 1, 2));

    assert_eq!(arena.remove(b), Some('b'));
    assert_eq!(arena.remove(b), None, "A slot can only be emptied once.");
    assert_eq!(arena.get(b), None);
    assert_eq!(arena.len(), 2);

    assert_eq!(arena.insert('d'), b, "The most recently freed slot should be reused.");
    assert_eq!(arena[a], 'a');
    assert_eq!(arena[b], 'd');
    arena[c] = 'e';
    assert_eq!(arena.get(c), Some(&'e'));

    assert_panics!({ arena[10]; });
}

#[test]
fn test_clear_drops() {
    let counter = DropCounter::new();
    let mut arena = Arena::with_cap(4);
    for _ in 0..4 {
        arena.insert(counter.clone());
    }
    drop(arena.remove(2));
    assert_eq!(counter.take(), 1);

    arena.clear();
    assert_eq!(counter.take(), 3);
    assert_eq!(arena.len(), 0);
    assert_eq!(arena.insert(counter.clone()), 0, "A cleared arena should start over.");
}
