use super::LinkedDeque;
use crate::util::error::{CollectionError, ConcurrentStructuralChange, NOTHING_TO_REMOVE};

/// A fail-fast position within a [`LinkedDeque`], which can remove the element it last yielded in
/// constant time.
///
/// # Examples
/// ```
/// # use scratch_collections::collections::linked::LinkedDeque;
/// let mut deque: LinkedDeque<u8> = (1..=6).collect();
/// let mut cursor = deque.cursor();
///
/// while let Some(item) = cursor.next(&deque).unwrap() {
///     if item % 2 == 0 {
///         cursor.remove(&mut deque).unwrap();
///     }
/// }
/// assert_eq!(&*deque.to_array(), &[1, 3, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    next: Option<usize>,
    last: Option<usize>,
    expected: u64,
}

impl Cursor {
    pub(crate) const fn new(head: Option<usize>, expected: u64) -> Cursor {
        Cursor {
            next: head,
            last: None,
            expected,
        }
    }

    /// Advances the cursor, returning the next element from the front or [`None`] once the back
    /// has been passed.
    pub fn next<'a, T>(
        &mut self,
        deque: &'a LinkedDeque<T>,
    ) -> Result<Option<&'a T>, ConcurrentStructuralChange> {
        deque.mods.check(self.expected)?;

        let Some(id) = self.next else {
            return Ok(None);
        };
        let node = &deque.nodes[id];
        self.last = Some(id);
        self.next = node.next;
        Ok(Some(&node.value))
    }

    /// Removes the element most recently returned by [`next`](Cursor::next).
    pub fn remove<T>(&mut self, deque: &mut LinkedDeque<T>) -> Result<T, CollectionError> {
        deque.mods.check(self.expected)?;
        let id = self.last.take().ok_or(NOTHING_TO_REMOVE)?;

        let item = deque.unlink(id).ok_or(NOTHING_TO_REMOVE)?;
        self.expected = deque.mods.get();
        Ok(item)
    }
}
