use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use super::{Cursor, Iter};
use crate::collections::arena::Arena;
use crate::collections::contiguous::Array;
use crate::collections::hash::table::{self, MIN_BUCKETS};
use crate::collections::traits::{Container, Set};
use crate::util::error::EmptyContainer;
use crate::util::fmt::{DebugIter, write_list};
use crate::util::mod_count::ModCount;

/// A hash set which remembers the order its elements were added in.
///
/// Every entry is threaded onto two chains at once: the chain of its bucket, and a doubly linked
/// chain through all entries in insertion order. Iteration follows the second chain, so it visits
/// elements oldest first regardless of their hashes. Adding an element which is already present
/// doesn't move it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedHashSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(1)`**, `O(n)` |
/// | `contains` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `first`, `last` | `O(1)` |
///
/// \* In the event of a hash collision, these methods will walk the colliding chain.
///
/// \** If the LinkedHashSet reaches its load factor, `add` has to relink every entry into a bucket
/// array of twice the size.
pub struct LinkedHashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) entries: Arena<Entry<T>>,
    pub(crate) buckets: Array<Option<usize>>,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
    pub(crate) hasher: B,
    pub(crate) mods: ModCount,
}

#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub hash: u64,
    pub item: T,
    pub next_in_bucket: Option<usize>,
    pub before: Option<usize>,
    pub after: Option<usize>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> LinkedHashSet<T, B> {
    /// Creates a new LinkedHashSet with no buckets and the default value for `B`.
    pub fn new() -> LinkedHashSet<T, B> {
        LinkedHashSet::with_hasher(B::default())
    }

    /// Creates a new LinkedHashSet with enough buckets to hold `cap` elements without growing.
    pub fn with_cap(cap: usize) -> LinkedHashSet<T, B> {
        LinkedHashSet::with_cap_and_hasher(cap, B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> LinkedHashSet<T, B> {
    pub const fn with_hasher(hasher: B) -> LinkedHashSet<T, B> {
        LinkedHashSet {
            entries: Arena::new(),
            buckets: Array::new(),
            head: None,
            tail: None,
            hasher,
            mods: ModCount::new(),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> LinkedHashSet<T, B> {
        LinkedHashSet {
            entries: Arena::with_cap(cap),
            buckets: Array::repeat_default(table::buckets_for(cap)),
            head: None,
            tail: None,
            hasher,
            mods: ModCount::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    /// Returns the current number of buckets.
    pub const fn cap(&self) -> usize {
        self.buckets.size()
    }

    /// Adds `item` after every element already in the set, returning true if it wasn't already
    /// present. An element which is already present keeps its position.
    pub fn add(&mut self, item: T) -> bool {
        if self.buckets.is_empty() {
            self.resize(MIN_BUCKETS);
        }

        let hash = table::spread_hash(&self.hasher, &item);
        if self.find(hash, &item).is_some() {
            return false;
        }

        let bucket = table::bucket_index(hash, self.cap());
        let id = self.entries.insert(Entry {
            hash,
            item,
            next_in_bucket: self.buckets[bucket],
            before: self.tail,
            after: None,
        });

        self.buckets[bucket] = Some(id);
        match self.tail {
            Some(tail) => self.entries[tail].after = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.mods.bump();

        if table::should_grow(self.len(), self.cap()) {
            self.resize(table::grown(self.cap()));
        }
        true
    }

    /// Returns the element equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.is_empty() {
            return None;
        }

        let hash = table::spread_hash(&self.hasher, item);
        self.find(hash, item).map(|id| &self.entries[id].item)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(item).is_some()
    }

    /// Removes the element equal to `item`, returning true if one was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(item).is_some()
    }

    /// Removes and returns the element equal to `item`, if there is one.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.is_empty() {
            return None;
        }

        let hash = table::spread_hash(&self.hasher, item);
        let id = self.find(hash, item)?;
        self.unlink(id)
    }

    /// Returns the oldest element.
    pub fn first(&self) -> Result<&T, EmptyContainer> {
        let head = self.head.ok_or(EmptyContainer)?;
        Ok(&self.entries[head].item)
    }

    /// Returns the newest element.
    pub fn last(&self) -> Result<&T, EmptyContainer> {
        let tail = self.tail.ok_or(EmptyContainer)?;
        Ok(&self.entries[tail].item)
    }

    /// Removes and returns the oldest element.
    pub fn poll_first(&mut self) -> Option<T> {
        self.unlink(self.head?)
    }

    /// Removes and returns the newest element.
    pub fn poll_last(&mut self) -> Option<T> {
        self.unlink(self.tail?)
    }

    /// Keeps only the elements for which `f` returns true, preserving their order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut next = self.head;
        while let Some(id) = next {
            let entry = &self.entries[id];
            next = entry.after;
            if !f(&entry.item) {
                self.unlink(id);
            }
        }
    }

    /// Removes all elements, keeping the bucket array.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets.fill(None);
        self.head = None;
        self.tail = None;
        self.mods.bump();
    }

    /// Returns a double-ended iterator over all elements, oldest first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.entries, self.head, self.tail, self.len())
    }

    /// Copies every element into a new [`Array`], oldest first.
    pub fn to_array(&self) -> Array<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns a fail-fast [`Cursor`] positioned before the oldest element.
    pub const fn cursor(&self) -> Cursor {
        Cursor::new(self.head, self.mods.get())
    }

    /// Returns the id of the entry holding an element equal to `item`. The bucket array must be
    /// allocated.
    pub(crate) fn find<Q>(&self, hash: u64, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut next = self.buckets[table::bucket_index(hash, self.cap())];
        while let Some(id) = next {
            let entry = &self.entries[id];
            if entry.hash == hash && entry.item.borrow() == item {
                return Some(id);
            }
            next = entry.next_in_bucket;
        }
        None
    }

    /// Detaches the entry `id` from both its bucket chain and the insertion order, then frees it.
    pub(crate) fn unlink(&mut self, id: usize) -> Option<T> {
        let bucket = table::bucket_index(self.entries.get(id)?.hash, self.cap());

        let mut prev_in_bucket = None;
        let mut next = self.buckets[bucket];
        while let Some(current) = next {
            if current == id {
                break;
            }
            prev_in_bucket = Some(current);
            next = self.entries[current].next_in_bucket;
        }

        let entry = self.entries.remove(id)?;

        match prev_in_bucket {
            Some(prev) => self.entries[prev].next_in_bucket = entry.next_in_bucket,
            None => self.buckets[bucket] = entry.next_in_bucket,
        }
        match entry.before {
            Some(before) => self.entries[before].after = entry.after,
            None => self.head = entry.after,
        }
        match entry.after {
            Some(after) => self.entries[after].before = entry.before,
            None => self.tail = entry.before,
        }

        self.mods.bump();
        Some(entry.item)
    }

    /// Relinks every entry into a new bucket array with `buckets` buckets, in insertion order.
    pub(crate) fn resize(&mut self, buckets: usize) {
        log::trace!(
            "rehashing linked hash set of {} from {} to {} buckets",
            std::any::type_name::<T>(),
            self.cap(),
            buckets,
        );

        self.buckets = Array::repeat_default(buckets);

        let mut next = self.head;
        while let Some(id) = next {
            let bucket = table::bucket_index(self.entries[id].hash, buckets);
            let entry = &mut self.entries[id];
            entry.next_in_bucket = mem::replace(&mut self.buckets[bucket], Some(id));
            next = entry.after;
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> Container<T> for LinkedHashSet<T, B> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        LinkedHashSet::clear(self);
    }

    fn contains(&self, item: &T) -> bool {
        LinkedHashSet::contains(self, item)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for LinkedHashSet<T, B> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, item: T) -> bool {
        LinkedHashSet::add(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        LinkedHashSet::remove(self, item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedHashSet::iter(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for LinkedHashSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for LinkedHashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for LinkedHashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = LinkedHashSet::with_cap(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for LinkedHashSet<T, B> {
    fn clone(&self) -> Self {
        let mut set = LinkedHashSet::with_cap_and_hasher(self.len(), self.hasher.clone());
        set.extend(self.iter().cloned());
        set
    }
}

/// Two LinkedHashSets are equal if they contain the same elements, in any order.
impl<T: Hash + Eq, B: BuildHasher> PartialEq for LinkedHashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for LinkedHashSet<T, B> {}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for LinkedHashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedHashSet")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for LinkedHashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}
