use super::BinaryHeap;
use crate::util::error::ConcurrentStructuralChange;

/// A read-only, fail-fast position within a [`BinaryHeap`], visiting elements in heap-array order.
#[derive(Debug, Clone)]
pub struct Cursor {
    next: usize,
    expected: u64,
}

impl Cursor {
    pub(crate) const fn new(expected: u64) -> Cursor {
        Cursor { next: 0, expected }
    }

    /// Advances the cursor, returning the next element or [`None`] once every element has been
    /// visited.
    pub fn next<'a, T, C>(
        &mut self,
        heap: &'a BinaryHeap<T, C>,
    ) -> Result<Option<&'a T>, ConcurrentStructuralChange> {
        heap.vec.mods.check(self.expected)?;

        let item = heap.vec.try_get(self.next).ok();
        if item.is_some() {
            self.next += 1;
        }
        Ok(item)
    }
}
