use super::RingDeque;
use crate::util::error::{CollectionError, ConcurrentStructuralChange, NOTHING_TO_REMOVE};

/// A fail-fast position within a [`RingDeque`], which can remove the element it last yielded.
///
/// Removing through the cursor moves whichever side of the removed element is shorter.
#[derive(Debug, Clone)]
pub struct Cursor {
    next: usize,
    last: Option<usize>,
    expected: u64,
}

impl Cursor {
    pub(crate) const fn new(expected: u64) -> Cursor {
        Cursor {
            next: 0,
            last: None,
            expected,
        }
    }

    /// Advances the cursor, returning the next element from the front or [`None`] once the back
    /// has been passed.
    pub fn next<'a, T>(
        &mut self,
        deque: &'a RingDeque<T>,
    ) -> Result<Option<&'a T>, ConcurrentStructuralChange> {
        deque.mods.check(self.expected)?;

        let item = deque.try_get(self.next).ok();
        if item.is_some() {
            self.last = Some(self.next);
            self.next += 1;
        }
        Ok(item)
    }

    /// Removes the element most recently returned by [`next`](Cursor::next).
    pub fn remove<T>(&mut self, deque: &mut RingDeque<T>) -> Result<T, CollectionError> {
        deque.mods.check(self.expected)?;
        let index = self.last.take().ok_or(NOTHING_TO_REMOVE)?;

        let item = deque.try_remove(index)?;
        self.next = index;
        self.expected = deque.mods.get();
        Ok(item)
    }
}
