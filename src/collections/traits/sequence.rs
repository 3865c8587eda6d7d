use super::Container;
use crate::util::error::IndexOutOfRange;

/// An index-addressable collection which keeps its elements in insertion order.
///
/// Every index-based method is checked: lookups accept indices in `[0, len)` while insertion
/// accepts `[0, len]`.
pub trait Sequence<T>: Container<T> {
    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange>;

    /// Replaces the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfRange>;

    /// Inserts `value` at `index`, moving all following elements back by one.
    fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange>;

    /// Removes and returns the element at `index`, moving all following elements forward by one.
    fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange>;

    /// Adds `value` to the end of the sequence.
    fn push(&mut self, value: T);

    /// Returns the index of the first element equal to `item`.
    fn index_of(&self, item: &T) -> Option<usize>;

    /// Returns the index of the last element equal to `item`.
    fn last_index_of(&self, item: &T) -> Option<usize>;
}
