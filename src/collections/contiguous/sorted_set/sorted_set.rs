use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::Cursor;
use crate::collections::contiguous::{Array, Vector};
use crate::collections::traits::{Comparator, Container, NaturalOrder, Set};
use crate::util::error::EmptyContainer;
use crate::util::fmt::{DebugIter, write_list};

/// A set which keeps its elements sorted in a [`Vector`], locating them by binary search.
///
/// Elements are ordered (and deduplicated) by the set's [`Comparator`]. Two elements which compare
/// as [`Equal`](Ordering::Equal) are the same element as far as the set is concerned.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SortedArraySet.
///
/// | Method | Complexity |
/// |-|-|
/// | `contains` | `O(log n)` |
/// | `ceiling`, `floor`, `higher`, `lower` | `O(log n)` |
/// | `add` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `first`, `last` | `O(1)` |
pub struct SortedArraySet<T, C = NaturalOrder> {
    pub(crate) vec: Vector<T>,
    pub(crate) cmp: C,
}

impl<T: Ord> SortedArraySet<T> {
    /// Creates a new, empty set ordered by [`Ord`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::SortedArraySet;
    /// let mut set = SortedArraySet::new();
    /// set.add(5);
    /// set.add(3);
    /// set.add(8);
    /// assert_eq!(set.ceiling(&4), Some(&5));
    /// assert_eq!(set.floor(&4), Some(&3));
    /// ```
    pub const fn new() -> SortedArraySet<T> {
        SortedArraySet::with_comparator(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> SortedArraySet<T, C> {
    /// Creates a new, empty set ordered by `cmp`.
    pub const fn with_comparator(cmp: C) -> SortedArraySet<T, C> {
        SortedArraySet {
            vec: Vector::new(),
            cmp,
        }
    }

    pub const fn len(&self) -> usize {
        self.vec.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Searches for `item`, returning [`Ok`] with its index if present, otherwise [`Err`] with the
    /// index where it would have to be inserted to keep the set sorted.
    pub fn binary_search(&self, item: &T) -> Result<usize, usize> {
        let (mut low, mut high) = (0, self.vec.len());

        while low < high {
            let mid = low + (high - low) / 2;
            match self.cmp.compare(&self.vec[mid], item) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Ok(mid),
            }
        }
        Err(low)
    }

    /// Adds `item` to the set, returning false (and dropping `item`) if an equal element is
    /// already present.
    pub fn add(&mut self, item: T) -> bool {
        match self.binary_search(&item) {
            Ok(_) => false,
            Err(index) => {
                self.vec.insert(index, item);
                true
            },
        }
    }

    /// Removes the element equal to `item`, returning true if one was present.
    pub fn remove(&mut self, item: &T) -> bool {
        self.take(item).is_some()
    }

    /// Removes and returns the element equal to `item`.
    pub fn take(&mut self, item: &T) -> Option<T> {
        let index = self.binary_search(item).ok()?;
        Some(self.vec.remove(index))
    }

    pub fn contains(&self, item: &T) -> bool {
        self.binary_search(item).is_ok()
    }

    /// Returns the least element, or an error if the set is empty.
    pub fn first(&self) -> Result<&T, EmptyContainer> {
        self.vec.first().ok_or(EmptyContainer)
    }

    /// Returns the greatest element, or an error if the set is empty.
    pub fn last(&self) -> Result<&T, EmptyContainer> {
        self.vec.last().ok_or(EmptyContainer)
    }

    /// Removes and returns the least element.
    pub fn poll_first(&mut self) -> Option<T> {
        if self.vec.is_empty() {
            return None;
        }
        Some(self.vec.remove(0))
    }

    /// Removes and returns the greatest element.
    pub fn poll_last(&mut self) -> Option<T> {
        self.vec.pop()
    }

    /// Returns the least element greater than or equal to `item`.
    pub fn ceiling(&self, item: &T) -> Option<&T> {
        match self.binary_search(item) {
            Ok(index) | Err(index) => self.vec.try_get(index).ok(),
        }
    }

    /// Returns the greatest element less than or equal to `item`.
    pub fn floor(&self, item: &T) -> Option<&T> {
        match self.binary_search(item) {
            Ok(index) => Some(&self.vec[index]),
            Err(index) => self.vec.try_get(index.checked_sub(1)?).ok(),
        }
    }

    /// Returns the least element strictly greater than `item`.
    pub fn higher(&self, item: &T) -> Option<&T> {
        let index = match self.binary_search(item) {
            Ok(index) => index + 1,
            Err(index) => index,
        };
        self.vec.try_get(index).ok()
    }

    /// Returns the greatest element strictly less than `item`.
    pub fn lower(&self, item: &T) -> Option<&T> {
        let (Ok(index) | Err(index)) = self.binary_search(item);
        self.vec.try_get(index.checked_sub(1)?).ok()
    }

    /// Keeps only the elements for which `f` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        self.vec.retain(f);
    }

    pub fn clear(&mut self) {
        self.vec.clear();
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }

    /// Returns the elements as a sorted slice.
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }

    /// Copies every element into a new [`Array`], in ascending order.
    pub fn to_array(&self) -> Array<T>
    where
        T: Clone,
    {
        self.vec.to_array()
    }

    /// Returns a fail-fast [`Cursor`] positioned before the least element.
    pub const fn cursor(&self) -> Cursor {
        Cursor::new(self.vec.cursor())
    }
}

impl<T, C: Comparator<T>> Container<T> for SortedArraySet<T, C> {
    fn len(&self) -> usize {
        self.vec.len()
    }

    fn clear(&mut self) {
        SortedArraySet::clear(self);
    }

    fn contains(&self, item: &T) -> bool {
        SortedArraySet::contains(self, item)
    }
}

impl<T, C: Comparator<T>> Set<T> for SortedArraySet<T, C> {
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, item: T) -> bool {
        SortedArraySet::add(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        SortedArraySet::remove(self, item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.vec.iter()
    }
}

impl<T: Ord> Default for SortedArraySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Extend<T> for SortedArraySet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for SortedArraySet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = SortedArraySet::with_comparator(C::default());
        set.extend(iter);
        set
    }
}

impl<T: Clone, C: Clone> Clone for SortedArraySet<T, C> {
    fn clone(&self) -> Self {
        SortedArraySet {
            vec: self.vec.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: PartialEq, C> PartialEq for SortedArraySet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq, C> Eq for SortedArraySet<T, C> {}

impl<T: Debug, C> Debug for SortedArraySet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedArraySet")
            .field("contents", &DebugIter(self.vec.iter()))
            .field("len", &self.vec.len())
            .finish()
    }
}

impl<T: Display, C> Display for SortedArraySet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.vec.iter())
    }
}
