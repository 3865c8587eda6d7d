use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::Cursor;
use crate::collections::contiguous::{Array, Vector};
use crate::collections::traits::{ByRef, Comparator, Container, NaturalOrder, PriorityQueue};
use crate::util::error::EmptyContainer;
use crate::util::fmt::{DebugIter, write_list};

/// A priority queue backed by a binary min-heap stored in a [`Vector`].
///
/// The element which compares as the least under the heap's [`Comparator`] has the highest
/// priority and is always at the root. With [`NaturalOrder`] this is a min-heap, with
/// [`ReverseOrder`](crate::collections::traits::ReverseOrder) it is a max-heap.
///
/// Borrowed iteration visits elements in heap-array order, which is unspecified beyond the root
/// coming first. Use [`sorted`](BinaryHeap::sorted) for an ordered snapshot.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the BinaryHeap.
///
/// | Method | Complexity |
/// |-|-|
/// | `offer` | `O(log n)`* |
/// | `poll` | `O(log n)` |
/// | `peek` | `O(1)` |
/// | `remove` | `O(n)` |
/// | `from_vector` | `O(n)` |
/// | `sorted` | `O(n log n)` |
///
/// \* Amortized, the underlying Vector may have to grow.
pub struct BinaryHeap<T, C = NaturalOrder> {
    pub(crate) vec: Vector<T>,
    pub(crate) cmp: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates a new, empty min-heap ordered by [`Ord`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::BinaryHeap;
    /// let mut heap = BinaryHeap::new();
    /// heap.offer(5);
    /// heap.offer(3);
    /// heap.offer(8);
    /// assert_eq!(heap.poll(), Some(3));
    /// assert_eq!(heap.poll(), Some(5));
    /// assert_eq!(heap.poll(), Some(8));
    /// assert_eq!(heap.poll(), None);
    /// ```
    pub const fn new() -> BinaryHeap<T> {
        BinaryHeap::with_comparator(NaturalOrder)
    }

    /// Creates a new, empty min-heap with space for `cap` elements.
    pub fn with_cap(cap: usize) -> BinaryHeap<T> {
        BinaryHeap {
            vec: Vector::with_cap(cap),
            cmp: NaturalOrder,
        }
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates a new, empty heap which orders its elements using `cmp`.
    pub const fn with_comparator(cmp: C) -> BinaryHeap<T, C> {
        BinaryHeap {
            vec: Vector::new(),
            cmp,
        }
    }

    /// Creates a heap from the contents of `vec`, rearranging them in place in linear time.
    pub fn from_vector(vec: Vector<T>, cmp: C) -> BinaryHeap<T, C> {
        let mut heap = BinaryHeap { vec, cmp };
        heap.heapify();
        heap
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

    /// Adds `value` to the heap.
    pub fn offer(&mut self, value: T) {
        self.vec.push(value);
        self.sift_up(self.vec.len() - 1);
    }

    /// Removes and returns the highest priority element, or [`None`] if the heap is empty.
    pub fn poll(&mut self) -> Option<T> {
        if self.vec.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Returns the highest priority element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.vec.first()
    }

    /// Returns the highest priority element, or an error if the heap is empty.
    pub fn element(&self) -> Result<&T, EmptyContainer> {
        self.peek().ok_or(EmptyContainer)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.vec.contains(item)
    }

    /// Removes one element equal to `item`, returning true if one was found.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.vec.index_of(item) {
            Some(index) => {
                self.remove_at(index);
                true
            },
            None => false,
        }
    }

    /// Keeps only the elements for which `f` returns true, then restores the heap order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        let len = self.vec.len();
        self.vec.retain(f);

        if self.vec.len() != len {
            self.heapify();
        }
    }

    pub fn clear(&mut self) {
        self.vec.clear();
    }

    /// Returns references to every element, ordered from highest to lowest priority. The heap
    /// itself is not modified.
    pub fn sorted(&self) -> Vector<&T> {
        let mut refs = BinaryHeap::from_vector(self.vec.iter().collect(), ByRef(&self.cmp));
        let mut sorted = Vector::with_cap(refs.len());

        while let Some(item) = refs.poll() {
            sorted.push(item);
        }
        sorted
    }

    /// Consumes the heap, returning its elements ordered from highest to lowest priority.
    pub fn into_sorted_vector(mut self) -> Vector<T> {
        let mut sorted = Vector::with_cap(self.len());

        while let Some(item) = self.poll() {
            sorted.push(item);
        }
        sorted
    }

    /// Copies every element into a new [`Array`], in heap-array order.
    pub fn to_array(&self) -> Array<T>
    where
        T: Clone,
    {
        self.vec.to_array()
    }

    /// Returns the elements in heap-array order.
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }

    /// Returns an iterator over the elements in heap-array order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }

    /// Returns a read-only, fail-fast [`Cursor`] over the heap array.
    pub const fn cursor(&self) -> Cursor {
        Cursor::new(self.vec.mods.get())
    }

    /// Removes the element at `index` in the heap array, replacing it with the last element and
    /// moving that into place.
    pub(crate) fn remove_at(&mut self, index: usize) -> T {
        let last = self.vec.len() - 1;
        self.vec.swap(index, last);
        let removed = self.vec.remove(last);

        if index < self.vec.len() {
            // The replacement might belong above or below index, but never both.
            if self.sift_down(index) == index {
                self.sift_up(index);
            }
        }
        removed
    }

    /// Rearranges the whole array into heap order, bottom-up.
    pub(crate) fn heapify(&mut self) {
        for index in (0..self.vec.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Moves the element at `index` towards the root while it has a higher priority than its
    /// parent. Returns its final index.
    pub(crate) fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare(index, parent) != Ordering::Less {
                break;
            }
            self.vec.swap(index, parent);
            index = parent;
        }
        index
    }

    /// Moves the element at `index` towards the leaves while either child has a higher priority.
    /// Returns its final index.
    pub(crate) fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.vec.len();

        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.compare(right, left) == Ordering::Less {
                right
            } else {
                left
            };

            if self.compare(child, index) != Ordering::Less {
                break;
            }
            self.vec.swap(index, child);
            index = child;
        }
        index
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        self.cmp.compare(&self.vec[a], &self.vec[b])
    }
}

impl<T: PartialEq, C: Comparator<T>> Container<T> for BinaryHeap<T, C> {
    fn len(&self) -> usize {
        self.vec.len()
    }

    fn clear(&mut self) {
        BinaryHeap::clear(self);
    }

    fn contains(&self, item: &T) -> bool {
        BinaryHeap::contains(self, item)
    }
}

impl<T: PartialEq, C: Comparator<T>> PriorityQueue<T> for BinaryHeap<T, C> {
    fn offer(&mut self, value: T) {
        BinaryHeap::offer(self, value);
    }

    fn poll(&mut self) -> Option<T> {
        BinaryHeap::poll(self)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.offer(item);
        }
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BinaryHeap::from_vector(iter.into_iter().collect(), C::default())
    }
}

impl<T: Clone, C: Clone> Clone for BinaryHeap<T, C> {
    fn clone(&self) -> Self {
        BinaryHeap {
            vec: self.vec.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: Debug, C> Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("heap", &DebugIter(self.vec.iter()))
            .field("len", &self.vec.len())
            .finish()
    }
}

/// Displays the elements from highest to lowest priority.
impl<T: Display, C: Comparator<T>> Display for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.sorted())
    }
}
