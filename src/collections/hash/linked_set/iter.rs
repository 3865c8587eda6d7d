use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::{Entry, LinkedHashSet};
use crate::collections::arena::Arena;

/// A borrowed, double-ended iterator over a [`LinkedHashSet`], oldest element first. See
/// [`LinkedHashSet::iter`].
pub struct Iter<'a, T> {
    entries: &'a Arena<Entry<T>>,
    front: Option<usize>,
    back: Option<usize>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(
        entries: &'a Arena<Entry<T>>,
        front: Option<usize>,
        back: Option<usize>,
        len: usize,
    ) -> Iter<'a, T> {
        Iter {
            entries,
            front,
            back,
            len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let entry = &self.entries[self.front?];
        self.front = entry.after;
        self.len -= 1;
        Some(&entry.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let entry = &self.entries[self.back?];
        self.back = entry.before;
        self.len -= 1;
        Some(&entry.item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a LinkedHashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owned iterator over a [`LinkedHashSet`], oldest element first.
pub struct IntoIter<T: Hash + Eq, B: BuildHasher> {
    set: LinkedHashSet<T, B>,
}

impl<T: Hash + Eq, B: BuildHasher> Iterator for IntoIter<T, B> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.set.poll_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len(), Some(self.set.len()))
    }
}

impl<T: Hash + Eq, B: BuildHasher> DoubleEndedIterator for IntoIter<T, B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.set.poll_last()
    }
}

impl<T: Hash + Eq, B: BuildHasher> ExactSizeIterator for IntoIter<T, B> {}

impl<T: Hash + Eq, B: BuildHasher> FusedIterator for IntoIter<T, B> {}

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for LinkedHashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T, B>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { set: self }
    }
}
