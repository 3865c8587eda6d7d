use super::BinaryHeap;
use crate::collections::contiguous::vector;

impl<T, C> IntoIterator for BinaryHeap<T, C> {
    type Item = T;

    type IntoIter = vector::IntoIter<T>;

    /// Consumes the heap, yielding its elements in heap-array order.
    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}
