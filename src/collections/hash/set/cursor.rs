use std::hash::{BuildHasher, Hash};

use super::HashSet;
use crate::util::error::{CollectionError, ConcurrentStructuralChange, NOTHING_TO_REMOVE};

/// A fail-fast position within a [`HashSet`], which can remove the element it last yielded.
///
/// The cursor visits elements in the same bucket order as [`HashSet::iter`].
#[derive(Debug, Clone)]
pub struct Cursor {
    bucket: usize,
    depth: usize,
    last: Option<(usize, usize)>,
    expected: u64,
}

impl Cursor {
    pub(crate) const fn new(expected: u64) -> Cursor {
        Cursor {
            bucket: 0,
            depth: 0,
            last: None,
            expected,
        }
    }

    /// Advances the cursor, returning the next element or [`None`] once every bucket has been
    /// visited.
    pub fn next<'a, T: Hash + Eq, B: BuildHasher>(
        &mut self,
        set: &'a HashSet<T, B>,
    ) -> Result<Option<&'a T>, ConcurrentStructuralChange> {
        set.mods.check(self.expected)?;

        while self.bucket < set.cap() {
            if let Some(node) = set.node_at(self.bucket, self.depth) {
                self.last = Some((self.bucket, self.depth));
                self.depth += 1;
                return Ok(Some(&node.item));
            }
            self.bucket += 1;
            self.depth = 0;
        }
        Ok(None)
    }

    /// Removes the element most recently returned by [`next`](Cursor::next).
    pub fn remove<T: Hash + Eq, B: BuildHasher>(
        &mut self,
        set: &mut HashSet<T, B>,
    ) -> Result<T, CollectionError> {
        set.mods.check(self.expected)?;
        let (bucket, depth) = self.last.take().ok_or(NOTHING_TO_REMOVE)?;

        let item = set.unlink_at(bucket, depth).ok_or(NOTHING_TO_REMOVE)?;
        // The rest of the chain moved up a link.
        self.bucket = bucket;
        self.depth = depth;
        self.expected = set.mods.get();
        Ok(item)
    }
}
