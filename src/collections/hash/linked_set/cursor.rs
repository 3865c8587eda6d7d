use std::hash::{BuildHasher, Hash};

use super::LinkedHashSet;
use crate::util::error::{CollectionError, ConcurrentStructuralChange, NOTHING_TO_REMOVE};

/// A fail-fast position within a [`LinkedHashSet`], which can remove the element it last yielded.
/// Elements are visited oldest first.
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

    pub fn next<'a, T: Hash + Eq, B: BuildHasher>(
        &mut self,
        set: &'a LinkedHashSet<T, B>,
    ) -> Result<Option<&'a T>, ConcurrentStructuralChange> {
        set.mods.check(self.expected)?;

        let Some(id) = self.next else {
            return Ok(None);
        };
        let entry = &set.entries[id];
        self.last = Some(id);
        self.next = entry.after;
        Ok(Some(&entry.item))
    }

    /// Removes the element most recently returned by [`next`](Cursor::next).
    pub fn remove<T: Hash + Eq, B: BuildHasher>(
        &mut self,
        set: &mut LinkedHashSet<T, B>,
    ) -> Result<T, CollectionError> {
        set.mods.check(self.expected)?;
        let id = self.last.take().ok_or(NOTHING_TO_REMOVE)?;

        let item = set.unlink(id).ok_or(NOTHING_TO_REMOVE)?;
        self.expected = set.mods.get();
        Ok(item)
    }
}
