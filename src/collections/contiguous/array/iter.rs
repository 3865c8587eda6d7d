use std::iter::FusedIterator;
use std::mem::MaybeUninit;

use super::Array;
#[allow(unused)]
use crate::collections::contiguous::Vector;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let end = self.size();
        IntoIter::new(self.forget_init(), 0, end)
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owned type for owned iteration over an [`Array`] or [`Vector`]. See [`Array::into_iter`] and
/// [`Vector::into_iter`].
///
/// The iterator owns the original allocation, which is released once the iterator is dropped.
pub struct IntoIter<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Creates an iterator over the initialized range `start..end` of `arr`.
    pub(crate) const fn new(arr: Array<MaybeUninit<T>>, start: usize, end: usize) -> IntoIter<T> {
        IntoIter { arr, start, end }
    }

    /// Returns the remaining items as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: All values in start..end are initialized and MaybeUninit<T> has the same layout
        // as T.
        unsafe {
            std::slice::from_raw_parts(
                self.arr.ptr.as_ptr().add(self.start).cast(),
                self.end - self.start,
            )
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.arr[self.start..self.end] {
            // SAFETY: Only values in start..end are initialized, and each is dropped once.
            unsafe { slot.assume_init_drop() }
        }
        // Implicitly drop arr, which only deallocates.
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The value at start is initialized. Incrementing start afterwards means it
            // won't be read or dropped again, so the value is moved out.
            let value = unsafe { self.arr[self.start].assume_init_read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The value at the decremented end is initialized and now outside of the
            // range which will be read or dropped.
            let value = unsafe { self.arr[self.end].assume_init_read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
