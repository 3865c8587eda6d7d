use std::iter::FusedIterator;

use super::{Ends, LinkedDeque, Node};
use crate::collections::arena::Arena;

/// A borrowed, double-ended iterator over a [`LinkedDeque`]. See [`LinkedDeque::iter`].
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    front: Option<usize>,
    back: Option<usize>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(nodes: &'a Arena<Node<T>>, ends: Ends, len: usize) -> Iter<'a, T> {
        Iter {
            nodes,
            front: ends.head(),
            back: ends.tail(),
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

        let node = &self.nodes[self.front?];
        self.front = node.next;
        self.len -= 1;
        Some(&node.value)
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

        let node = &self.nodes[self.back?];
        self.back = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

/// An owned iterator over a [`LinkedDeque`], from front to back.
pub struct IntoIter<T> {
    deque: LinkedDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedDeque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedDeque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
