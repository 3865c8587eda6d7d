use super::SortedArraySet;
use crate::collections::contiguous::vector;
use crate::util::error::{CollectionError, ConcurrentStructuralChange};

/// A fail-fast position within a [`SortedArraySet`], in ascending order, which can remove the
/// element it last yielded. Removal keeps the set sorted.
#[derive(Debug, Clone)]
pub struct Cursor {
    inner: vector::Cursor,
}

impl Cursor {
    pub(crate) const fn new(inner: vector::Cursor) -> Cursor {
        Cursor { inner }
    }

    /// Advances the cursor, returning the next greater element or [`None`] once the greatest
    /// element has been passed.
    pub fn next<'a, T, C>(
        &mut self,
        set: &'a SortedArraySet<T, C>,
    ) -> Result<Option<&'a T>, ConcurrentStructuralChange> {
        self.inner.next(&set.vec)
    }

    /// Removes the element most recently returned by [`next`](Cursor::next).
    pub fn remove<T, C>(&mut self, set: &mut SortedArraySet<T, C>) -> Result<T, CollectionError> {
        self.inner.remove(&mut set.vec)
    }
}
