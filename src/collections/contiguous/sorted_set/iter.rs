use super::SortedArraySet;
use crate::collections::contiguous::vector;

impl<T, C> IntoIterator for SortedArraySet<T, C> {
    type Item = T;

    type IntoIter = vector::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a SortedArraySet<T, C> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}
