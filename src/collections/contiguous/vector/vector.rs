use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use super::Cursor;
use crate::collections::contiguous::Array;
use crate::collections::traits::{Container, Sequence};
use crate::util::error::{CapacityOverflow, CollectionError, IndexOutOfRange, InvalidArgument};
use crate::util::fmt::{DebugIter, write_list};
use crate::util::mod_count::ModCount;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 10;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `set` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `append` | `O(n+m)` |
/// | `contains` | `O(n)` |
/// | `retain` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
    pub(crate) mods: ModCount,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the first
    /// element is added.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
            mods: ModCount::new(),
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
            mods: ModCount::new(),
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to any of the various capacity manipulation functions.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not in `[0, len)`.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, or an error if it is not in `[0, len)`.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Replaces the element at `index` with `value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is not in `[0, len)`.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Replaces the element at `index` with `value`, returning the old value, or an error if
    /// `index` is not in `[0, len)`. Replacing is not a structural modification.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(mem::replace(&mut self[index], value))
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow_for(1);
        }
        self.arr[self.len].write(value);
        self.len += 1;
        self.mods.bump();
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        self.mods.bump();
        // SAFETY: The slot at the old last index is initialized, and decrementing len first means
        // it won't be read or dropped again.
        Some(unsafe { self.arr[self.len].assume_init_read() })
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    ///
    /// # Panics
    /// Panics if `index` is not in `[0, len]`.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, or returns an error if `index` is not in
    /// `[0, len]`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        if index > self.len {
            return Err(IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        if self.len == self.cap() {
            self.grow_for(1);
        }

        self.arr[self.len].write(value);
        self.arr[index..=self.len].rotate_right(1);
        self.len += 1;
        self.mods.bump();
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if `index` is not in `[0, len)`.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, or returns an error if `index` is not in
    /// `[0, len)`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        self.check_index(index)?;

        self.arr[index..self.len].rotate_left(1);
        self.len -= 1;
        self.mods.bump();
        // SAFETY: The removed value has been rotated to the old last index, which is no longer
        // part of the initialized range.
        Ok(unsafe { self.arr[self.len].assume_init_read() })
    }

    /// Appends all elements from `other` to self.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn append(&mut self, mut other: Vector<T>) {
        self.reserve(other.len);

        // SAFETY: self has capacity for other.len more values and other is valid for other.len
        // reads. The two allocations are distinct.
        unsafe {
            ptr::copy_nonoverlapping(
                other.arr.ptr.as_ptr().cast_const(),
                self.arr.ptr.as_ptr().add(self.len),
                other.len,
            );
        }

        self.len += other.len;
        self.mods.bump();
        // The values have been moved, other only needs to deallocate.
        other.len = 0;
    }

    /// Returns true if the Vector contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|other| other == item)
    }

    /// Returns the index of the last element equal to `item`.
    pub fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|other| other == item)
    }

    /// Removes the first element equal to `item`, returning it if one was found.
    pub fn remove_item(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(item)?;
        Some(self.remove(index))
    }

    /// Removes all elements, dropping them in place. The capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shortens the Vector to `len` elements, dropping the rest. Has no effect if the Vector is
    /// already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let old_len = self.len;
        // Shorten first, so that a panicking drop leaks rather than double-dropping.
        self.len = len;
        self.mods.bump();

        for slot in &mut self.arr[len..old_len] {
            // SAFETY: All values in len..old_len were initialized and are now outside the
            // initialized range, so they are dropped exactly once.
            unsafe { slot.assume_init_drop() }
        }
    }

    /// Keeps only the elements for which `f` returns true, preserving their order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let len = self.len;
        // If f panics, the remaining elements are leaked instead of dropped twice.
        self.len = 0;

        let mut kept = 0;
        for index in 0..len {
            // SAFETY: Every slot from index onwards is still initialized.
            let keep = f(unsafe { self.arr[index].assume_init_ref() });
            if keep {
                self.arr.swap(kept, index);
                kept += 1;
            } else {
                // SAFETY: As above, and the slot is never read again.
                unsafe { self.arr[index].assume_init_drop() }
            }
        }

        if kept != len {
            self.mods.bump();
        }
        self.len = kept;
    }

    /// Returns a copy of the elements in `[from, to)` as a new Vector.
    ///
    /// # Panics
    /// Panics if `from > to` or `to > len`.
    pub fn sub_vector(&self, from: usize, to: usize) -> Vector<T>
    where
        T: Clone,
    {
        self.try_sub_vector(from, to).throw()
    }

    /// Returns a copy of the elements in `[from, to)` as a new Vector.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `from > to`, or [`IndexOutOfRange`] if `to > len`.
    pub fn try_sub_vector(&self, from: usize, to: usize) -> Result<Vector<T>, CollectionError>
    where
        T: Clone,
    {
        if from > to {
            return Err(InvalidArgument {
                reason: "range start is greater than its end",
            }
            .into());
        }
        if to > self.len {
            return Err(IndexOutOfRange {
                index: to,
                len: self.len,
            }
            .into());
        }

        Ok(self[from..to].iter().cloned().collect())
    }

    /// Copies every element into a new [`Array`] of exactly the right size.
    pub fn to_array(&self) -> Array<T>
    where
        T: Clone,
    {
        Array::from_fn(self.len, |index| self[index].clone())
    }

    /// Returns a fail-fast [`Cursor`] positioned before the first element.
    pub const fn cursor(&self) -> Cursor {
        Cursor::new(self.mods.get())
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() {
            return;
        }

        self.arr.realloc(new_cap);
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.arr.realloc(self.len);
    }

    /// Grows the internal Array so that at least `extra` more elements fit. The capacity is
    /// doubled, or raised to the required size if doubling isn't enough.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow_for(&mut self, extra: usize) {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();
        let new_cap = cmp::max(
            cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), required),
            MIN_CAP,
        );

        self.arr.realloc(new_cap);
    }

    /// Checks that the provided index is within `[0, len)`.
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
}

impl<T: PartialEq> Container<T> for Vector<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        Vector::clear(self);
    }

    fn contains(&self, item: &T) -> bool {
        Vector::contains(self, item)
    }
}

impl<T: PartialEq> Sequence<T> for Vector<T> {
    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.try_get(index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfRange> {
        self.try_set(index, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        self.try_insert(index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        self.try_remove(index)
    }

    fn push(&mut self, value: T) {
        Vector::push(self, value);
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        Vector::index_of(self, item)
    }

    fn last_index_of(&self, item: &T) -> Option<usize> {
        Vector::last_index_of(self, item)
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop.
        unsafe { ptr::drop_in_place::<[T]>(&mut **self) }

        // Implicitly drop self.arr, containing only MaybeUninit values without a no-op drop.
        // Doing so also deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        unsafe { slice::from_raw_parts(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the borrow checker prevents any other access for the lifetime
        // of the slice.
        unsafe { slice::from_raw_parts_mut(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());
        vec.extend(self.iter().cloned());
        vec
    }
}

impl<T> From<Vector<T>> for Array<T> {
    fn from(mut value: Vector<T>) -> Self {
        let len = value.len;
        let mut arr = mem::take(&mut value.arr);
        // The values now belong to arr.
        value.len = 0;

        arr.realloc(len);
        // SAFETY: All len values of the reallocated Array were initialized by the Vector.
        unsafe { arr.assume_init() }
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        Vector {
            arr: value.forget_init(),
            len,
            mods: ModCount::new(),
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}
