use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::{Cursor, Iter};
use crate::collections::contiguous::Array;
use crate::collections::hash::table::{self, MIN_BUCKETS};
use crate::collections::traits::{Container, Set};
use crate::util::fmt::{DebugIter, write_list};
use crate::util::mod_count::ModCount;

/// A set of unique elements which relies on the elements implementing [`Hash`].
///
/// Each bucket holds a singly linked chain of the elements which hash into it, and new elements
/// are added to the front of their chain. The bucket array is allocated by the first insertion
/// and doubles whenever the set becomes three quarters full.
///
/// It is a logic error for an element to be manipulated in a way that changes its hash while it
/// is in the set. Because of this, HashSet's API never hands out mutable access to its elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)`**, `O(n)` |
/// | `contains` | `O(1)`* |
/// | `remove` | `O(1)`* |
///
/// \* In the event of a hash collision, these methods will walk the colliding chain, while an
/// equal element is searched for.
///
/// \** If the HashSet reaches its load factor, `add` has to move every element into a bucket
/// array of twice the size.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) buckets: Array<Bucket<T>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
    pub(crate) mods: ModCount,
}

pub(crate) type Bucket<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub hash: u64,
    pub item: T,
    pub next: Bucket<T>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new HashSet with no buckets and the default value for `B`. Memory will be
    /// allocated by the first insertion.
    pub fn new() -> HashSet<T, B> {
        HashSet::with_hasher(B::default())
    }

    /// Creates a new HashSet with enough buckets to hold `cap` elements without growing, and the
    /// default value for `B`.
    pub fn with_cap(cap: usize) -> HashSet<T, B> {
        HashSet::with_cap_and_hasher(cap, B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new HashSet with no buckets and the provided `hasher`.
    pub const fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            buckets: Array::new(),
            len: 0,
            hasher,
            mods: ModCount::new(),
        }
    }

    /// Creates a new HashSet with enough buckets to hold `cap` elements without growing, and the
    /// provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            buckets: Array::repeat_default(table::buckets_for(cap)),
            len: 0,
            hasher,
            mods: ModCount::new(),
        }
    }

    /// Returns the length of the HashSet.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets.
    pub const fn cap(&self) -> usize {
        self.buckets.size()
    }

    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Adds `item` to the HashSet, returning true if it wasn't already present. If an equal element
    /// is already present, the set is left unchanged and `item` is dropped.
    pub fn add(&mut self, item: T) -> bool {
        if self.buckets.is_empty() {
            self.resize(MIN_BUCKETS);
        }

        let hash = table::spread_hash(&self.hasher, &item);
        if self.find(hash, &item).is_some() {
            return false;
        }

        let index = table::bucket_index(hash, self.cap());
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Node { hash, item, next }));
        self.len += 1;
        self.mods.bump();

        if table::should_grow(self.len, self.cap()) {
            self.resize(table::grown(self.cap()));
        }
        true
    }

    /// Returns the element equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of T
        // where equality and hashing carries over the borrow.
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.is_empty() {
            return None;
        }

        let hash = table::spread_hash(&self.hasher, item);
        self.find(hash, item).map(|node| &node.item)
    }

    /// Returns true if the HashSet contains an element equal to `item`.
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
        let index = table::bucket_index(hash, self.cap());
        let removed = unlink_first(&mut self.buckets[index], |node| {
            node.hash == hash && node.item.borrow() == item
        })?;

        self.len -= 1;
        self.mods.bump();
        Some(removed)
    }

    /// Keeps only the elements for which `f` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut removed = 0;

        for bucket in self.buckets.iter_mut() {
            // Kept nodes are relinked in their original order behind `tail`.
            let mut chain = bucket.take();
            let mut tail = bucket;
            while let Some(mut node) = chain {
                chain = node.next.take();
                if f(&node.item) {
                    tail = &mut tail.insert(node).next;
                } else {
                    removed += 1;
                }
            }
        }

        if removed > 0 {
            self.len -= removed;
            self.mods.bump();
        }
    }

    /// Removes all elements, keeping the bucket array.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            let mut chain = bucket.take();
            // One node at a time, so that long chains don't drop recursively.
            while let Some(mut node) = chain {
                chain = node.next.take();
            }
        }
        self.len = 0;
        self.mods.bump();
    }

    /// Returns an iterator over all elements in the HashSet, as references, in bucket order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buckets, self.len)
    }

    /// Copies every element into a new [`Array`], in iteration order.
    pub fn to_array(&self) -> Array<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns a fail-fast [`Cursor`] positioned before the first element.
    pub const fn cursor(&self) -> Cursor {
        Cursor::new(self.mods.get())
    }

    /// Returns the node holding an element equal to `item`, by walking the chain that `hash`
    /// selects. The bucket array must be allocated.
    pub(crate) fn find<Q>(&self, hash: u64, item: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = table::bucket_index(hash, self.cap());
        let mut next = self.buckets[index].as_deref();

        while let Some(node) = next {
            if node.hash == hash && node.item.borrow() == item {
                return Some(node);
            }
            next = node.next.as_deref();
        }
        None
    }

    /// Returns the node `depth` links into the chain of `bucket`.
    pub(crate) fn node_at(&self, bucket: usize, depth: usize) -> Option<&Node<T>> {
        let mut node = self.buckets.get(bucket)?.as_deref();
        for _ in 0..depth {
            node = node?.next.as_deref();
        }
        node
    }

    /// Removes the node `depth` links into the chain of `bucket`, returning its element.
    pub(crate) fn unlink_at(&mut self, bucket: usize, depth: usize) -> Option<T> {
        let mut seen = 0;
        let removed = unlink_first(self.buckets.get_mut(bucket)?, |_| {
            seen += 1;
            seen > depth
        })?;

        self.len -= 1;
        self.mods.bump();
        Some(removed)
    }

    /// Moves every node into a new bucket array with `buckets` buckets, using the stored hashes.
    pub(crate) fn resize(&mut self, buckets: usize) {
        log::trace!(
            "rehashing hash set of {} from {} to {} buckets",
            std::any::type_name::<T>(),
            self.cap(),
            buckets,
        );

        let old = mem::replace(&mut self.buckets, Array::repeat_default(buckets));
        for mut chain in old {
            while let Some(mut node) = chain {
                chain = node.next.take();

                let index = table::bucket_index(node.hash, buckets);
                node.next = self.buckets[index].take();
                self.buckets[index] = Some(node);
            }
        }
    }
}

/// Unlinks the first node in the chain starting at `link` for which `hit` returns true, returning
/// its element.
fn unlink_first<T, F>(mut link: &mut Bucket<T>, mut hit: F) -> Option<T>
where
    F: FnMut(&Node<T>) -> bool,
{
    loop {
        if hit(link.as_deref()?) {
            let node = *link.take()?;
            *link = node.next;
            return Some(node.item);
        }
        link = &mut link.as_mut()?.next;
    }
}

impl<T: Hash + Eq, B: BuildHasher> Drop for HashSet<T, B> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Hash + Eq, B: BuildHasher> Container<T> for HashSet<T, B> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for HashSet<T, B> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, item: T) -> bool {
        HashSet::add(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        HashSet::remove(self, item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = HashSet::with_cap(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        let mut set = HashSet::with_cap_and_hasher(self.len, self.hasher.clone());
        set.extend(self.iter().cloned());
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}
