use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem::MaybeUninit;
use std::ops::{Index, IndexMut, Range};
use std::ptr;
use std::slice;

use super::{Cursor, Iter, IterMut};
use crate::collections::contiguous::Array;
use crate::collections::traits::{Container, Deque};
use crate::util::error::IndexOutOfRange;
use crate::util::fmt::{DebugIter, write_list};
use crate::util::mod_count::ModCount;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 8;

/// A double-ended queue backed by a circular buffer.
///
/// The capacity is always a power of two (or zero before the first push), so wrapping a logical
/// index into the buffer is a bitmask rather than a division. When full, the buffer doubles and
/// the contents are copied to the front of the new buffer.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the RingDeque.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `push_front`, `push_back` | `O(1)`*, `O(n)` |
/// | `pop_front`, `pop_back` | `O(1)` |
/// | `remove` | `O(min(i, n-i))` |
/// | `contains` | `O(n)` |
///
/// \* If the buffer is full, it has to be grown first.
pub struct RingDeque<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) head: usize,
    pub(crate) len: usize,
    pub(crate) mods: ModCount,
}

impl<T> RingDeque<T> {
    /// Creates a new, empty RingDeque without allocating.
    pub const fn new() -> RingDeque<T> {
        RingDeque {
            arr: Array::new(),
            head: 0,
            len: 0,
            mods: ModCount::new(),
        }
    }

    /// Creates a new RingDeque which can hold at least `cap` elements before growing. The capacity
    /// is rounded up to a power of two.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> RingDeque<T> {
        if cap == 0 {
            return RingDeque::new();
        }

        RingDeque {
            arr: Array::new_uninit(cmp::max(cap.next_power_of_two(), MIN_CAP)),
            head: 0,
            len: 0,
            mods: ModCount::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the buffer.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    pub fn push_front(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.head = self.head.wrapping_sub(1) & (self.cap() - 1);
        self.arr[self.head].write(value);
        self.len += 1;
        self.mods.bump();
    }

    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        let tail = self.physical(self.len);
        self.arr[tail].write(value);
        self.len += 1;
        self.mods.bump();
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let head = self.head;
        self.head = self.physical(1);
        self.len -= 1;
        self.mods.bump();
        // SAFETY: The old head was initialized and has been moved out of the logical range.
        Some(unsafe { self.arr[head].assume_init_read() })
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let tail = self.physical(self.len);
        self.mods.bump();
        // SAFETY: The old last slot was initialized and has been moved out of the logical range.
        Some(unsafe { self.arr[tail].assume_init_read() })
    }

    pub fn front(&self) -> Option<&T> {
        self.try_get(0).ok()
    }

    pub fn back(&self) -> Option<&T> {
        self.try_get(self.len.checked_sub(1)?).ok()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.try_get_mut(0).ok()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.try_get_mut(self.len.checked_sub(1)?).ok()
    }

    /// Returns the element at the logical `index`, counting from the front.
    ///
    /// # Panics
    /// Panics if `index` is not in `[0, len)`.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns the element at the logical `index`, or an error if it is not in `[0, len)`.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.check_index(index)?;
        // SAFETY: Every logical index below len maps to an initialized slot.
        Ok(unsafe { self.arr[self.physical(index)].assume_init_ref() })
    }

    /// # Panics
    /// Panics if `index` is not in `[0, len)`.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        self.check_index(index)?;
        let physical = self.physical(index);
        // SAFETY: Every logical index below len maps to an initialized slot.
        Ok(unsafe { self.arr[physical].assume_init_mut() })
    }

    /// Removes and returns the element at `index`. Only the elements on the shorter side of
    /// `index` are moved to close the gap.
    ///
    /// # Panics
    /// Panics if `index` is not in `[0, len)`.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, or returns an error if it is not in
    /// `[0, len)`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        self.check_index(index)?;

        let target = self.physical(index);
        // SAFETY: The target is initialized. Its slot is treated as uninitialized from here on,
        // and the stale copy is moved out of the logical range below.
        let value = unsafe { self.arr[target].assume_init_read() };

        if index < self.len / 2 {
            for logical in (0..index).rev() {
                let (from, to) = (self.physical(logical), self.physical(logical + 1));
                self.arr.swap(from, to);
            }
            self.head = self.physical(1);
        } else {
            for logical in index..self.len - 1 {
                let (from, to) = (self.physical(logical + 1), self.physical(logical));
                self.arr.swap(from, to);
            }
        }

        self.len -= 1;
        self.mods.bump();
        Ok(value)
    }

    /// Returns true if the RingDeque contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|other| other == item)
    }

    /// Removes the first element (from the front) equal to `item`. Returns true if one was found.
    pub fn remove_first_occurrence(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.iter().position(|other| other == item) {
            Some(index) => self.try_remove(index).is_ok(),
            None => false,
        }
    }

    /// Removes the last element (from the front) equal to `item`. Returns true if one was found.
    pub fn remove_last_occurrence(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.iter().rposition(|other| other == item) {
            Some(index) => self.try_remove(index).is_ok(),
            None => false,
        }
    }

    /// Keeps only the elements for which `f` returns true, preserving their order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        for _ in 0..self.len {
            if let Some(item) = self.pop_front() {
                if f(&item) {
                    // Never grows, a slot was just freed.
                    self.push_back(item);
                }
            }
        }
    }

    /// Removes all elements, dropping them in place. The capacity is kept.
    pub fn clear(&mut self) {
        let (front, back) = self.as_mut_slices();
        let front: *mut [T] = front;
        let back: *mut [T] = back;

        self.head = 0;
        self.len = 0;
        self.mods.bump();

        // SAFETY: Both slices were initialized and are no longer part of the logical range, so
        // they are dropped exactly once.
        unsafe {
            ptr::drop_in_place(front);
            ptr::drop_in_place(back);
        }
    }

    /// Returns the contents as two slices, from front to back. The second slice is only non-empty
    /// if the contents wrap around the end of the buffer.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (front, back) = self.ranges();
        let base = self.arr.ptr.as_ptr().cast::<T>();

        // SAFETY: Both ranges are in bounds, initialized and don't overlap.
        unsafe {
            (
                slice::from_raw_parts(base.add(front.start), front.len()),
                slice::from_raw_parts(base.add(back.start), back.len()),
            )
        }
    }

    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (front, back) = self.ranges();
        let base = self.arr.ptr.as_ptr().cast::<T>();

        // SAFETY: Both ranges are in bounds, initialized and don't overlap, so the two mutable
        // slices don't alias.
        unsafe {
            (
                slice::from_raw_parts_mut(base.add(front.start), front.len()),
                slice::from_raw_parts_mut(base.add(back.start), back.len()),
            )
        }
    }

    /// Returns a double-ended iterator over the elements, from front to back. Use
    /// [`rev`](Iterator::rev) to iterate from back to front.
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        Iter::new(front, back)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.as_mut_slices();
        IterMut::new(front, back)
    }

    /// Copies every element into a new [`Array`], from front to back.
    pub fn to_array(&self) -> Array<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns a fail-fast [`Cursor`] positioned before the front element.
    pub const fn cursor(&self) -> Cursor {
        Cursor::new(self.mods.get())
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index >= self.len {
            Err(IndexOutOfRange {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Maps a logical index onto a slot in the buffer.
    pub(crate) const fn physical(&self, logical: usize) -> usize {
        self.head.wrapping_add(logical) & (self.cap().wrapping_sub(1))
    }

    /// Returns the two physical ranges holding the contents, from front to back.
    pub(crate) fn ranges(&self) -> (Range<usize>, Range<usize>) {
        if self.len == 0 {
            return (0..0, 0..0);
        }

        let front_end = cmp::min(self.head + self.len, self.cap());
        let wrapped = self.len - (front_end - self.head);
        (self.head..front_end, 0..wrapped)
    }

    /// Doubles the buffer (or allocates the minimum capacity) and copies the contents, unwrapped,
    /// to the front of the new buffer.
    ///
    /// # Panics
    /// Panics if the memory layout of the new buffer would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap().saturating_mul(2), MIN_CAP);
        log::trace!("relinearizing ring deque from {} to {} slots", self.cap(), new_cap);

        let (front, back) = self.ranges();
        let new_arr = Array::<T>::new_uninit(new_cap);

        // SAFETY: The source ranges are in bounds of the old buffer, the destination has room for
        // all len values and the two buffers are distinct allocations.
        unsafe {
            let src = self.arr.ptr.as_ptr();
            let dst = new_arr.ptr.as_ptr();
            ptr::copy_nonoverlapping(src.add(front.start), dst, front.len());
            ptr::copy_nonoverlapping(src.add(back.start), dst.add(front.len()), back.len());
        }

        // The old buffer only holds MaybeUninit values, so this just deallocates it.
        self.arr = new_arr;
        self.head = 0;
    }
}

impl<T: PartialEq> Container<T> for RingDeque<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        RingDeque::clear(self);
    }

    fn contains(&self, item: &T) -> bool {
        RingDeque::contains(self, item)
    }
}

impl<T: PartialEq> Deque<T> for RingDeque<T> {
    fn push_front(&mut self, value: T) {
        RingDeque::push_front(self, value);
    }

    fn push_back(&mut self, value: T) {
        RingDeque::push_back(self, value);
    }

    fn pop_front(&mut self) -> Option<T> {
        RingDeque::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        RingDeque::pop_back(self)
    }

    fn front(&self) -> Option<&T> {
        RingDeque::front(self)
    }

    fn back(&self) -> Option<&T> {
        RingDeque::back(self)
    }
}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Drop for RingDeque<T> {
    fn drop(&mut self) {
        let (front, back) = self.as_mut_slices();
        // SAFETY: Both slices are initialized and never accessed again. The buffer itself is
        // deallocated when arr is dropped.
        unsafe {
            ptr::drop_in_place(front);
            ptr::drop_in_place(back);
        }
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = RingDeque::new();
        deque.extend(iter);
        deque
    }
}

impl<T: Clone> Clone for RingDeque<T> {
    fn clone(&self) -> Self {
        let mut deque = RingDeque::with_cap(self.len);
        deque.extend(self.iter().cloned());
        deque
    }
}

impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T: Debug> Debug for RingDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingDeque")
            .field("contents", &DebugIter(self.iter()))
            .field("head", &self.head)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for RingDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}
