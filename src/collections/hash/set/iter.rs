use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::mem;
use std::slice;

use super::{Bucket, HashSet, Node};
use crate::collections::contiguous::array;

/// A type for borrowed iteration over a [`HashSet`]. Produces values of type `&T`, in bucket order.
///
/// See [`HashSet::iter`].
pub struct Iter<'a, T> {
    buckets: slice::Iter<'a, Bucket<T>>,
    node: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(buckets: &'a [Bucket<T>], len: usize) -> Iter<'a, T> {
        Iter {
            buckets: buckets.iter(),
            node: None,
            len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node {
                self.node = node.next.as_deref();
                self.len -= 1;
                return Some(&node.item);
            }
            self.node = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets.clone(),
            node: self.node,
            len: self.len,
        }
    }
}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for owned iteration over a [`HashSet`]. Produces values of type `T`, in bucket order.
///
/// See [`HashSet::into_iter`].
pub struct IntoIter<T> {
    buckets: array::IntoIter<Bucket<T>>,
    chain: Bucket<T>,
    len: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.chain.take() {
                let Node { item, next, .. } = *node;
                self.chain = next;
                self.len -= 1;
                return Some(item);
            }
            self.chain = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for HashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter {
            buckets: mem::take(&mut self.buckets).into_iter(),
            chain: None,
            len: mem::replace(&mut self.len, 0),
        }
    }
}
