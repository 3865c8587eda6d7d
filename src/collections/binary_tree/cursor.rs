use crate::util::error::{CollectionError, ConcurrentStructuralChange, NOTHING_TO_REMOVE};

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// The operations a [`Cursor`] needs from a tree map. Implemented by every map in this module.
pub trait TreeNavigation<K, V>: Sealed {
    /// Returns the entry with the least key strictly greater than `key`, or the first entry when
    /// `key` is [`None`]. This never restructures the tree, not even for a
    /// [`SplayTreeMap`](super::SplayTreeMap).
    fn next_entry(&self, key: Option<&K>) -> Option<(&K, &V)>;

    #[doc(hidden)]
    fn mod_count(&self) -> u64;

    #[doc(hidden)]
    fn remove_at_cursor(&mut self, key: &K) -> Option<(K, V)>;
}

/// A fail-fast position within a tree map, in ascending key order, which can remove the entry it
/// last yielded.
///
/// The cursor remembers the last key it yielded, so each step is a successor search taking
/// `O(log n)` time and the tree is free to rebalance between steps.
///
/// # Examples
/// ```
/// # use scratch_collections::collections::binary_tree::AvlTreeMap;
/// let mut map: AvlTreeMap<u8, char> = (0..6).zip('a'..).collect();
/// let mut cursor = map.cursor();
///
/// while let Some((key, _)) = cursor.next(&map).unwrap() {
///     if key % 2 == 0 {
///         cursor.remove(&mut map).unwrap();
///     }
/// }
/// assert_eq!(map.to_string(), "{1=b, 3=d, 5=f}");
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<K> {
    position: Option<K>,
    removable: bool,
    expected: u64,
}

impl<K: Ord + Clone> Cursor<K> {
    pub(crate) const fn new(expected: u64) -> Cursor<K> {
        Cursor {
            position: None,
            removable: false,
            expected,
        }
    }

    fn check<V>(&self, map: &impl TreeNavigation<K, V>) -> Result<(), ConcurrentStructuralChange> {
        let found = map.mod_count();
        if found == self.expected {
            Ok(())
        } else {
            Err(ConcurrentStructuralChange {
                expected: self.expected,
                found,
            })
        }
    }

    /// Advances the cursor, returning the entry with the next greater key or [`None`] once the
    /// greatest key has been passed.
    pub fn next<'a, V, M: TreeNavigation<K, V>>(
        &mut self,
        map: &'a M,
    ) -> Result<Option<(&'a K, &'a V)>, ConcurrentStructuralChange> {
        self.check(map)?;

        let entry = map.next_entry(self.position.as_ref());
        if let Some((key, _)) = entry {
            self.position = Some(key.clone());
            self.removable = true;
        }
        Ok(entry)
    }

    /// Removes the entry most recently returned by [`next`](Cursor::next).
    pub fn remove<V, M: TreeNavigation<K, V>>(
        &mut self,
        map: &mut M,
    ) -> Result<(K, V), CollectionError> {
        self.check(map)?;

        let key = match (&self.position, self.removable) {
            (Some(key), true) => key,
            _ => return Err(NOTHING_TO_REMOVE.into()),
        };
        let entry = map.remove_at_cursor(key).ok_or(NOTHING_TO_REMOVE)?;
        self.removable = false;
        self.expected = map.mod_count();
        Ok(entry)
    }
}
