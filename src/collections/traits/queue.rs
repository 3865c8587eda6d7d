use super::Container;
use crate::util::error::EmptyContainer;

/// A queue which always yields its highest priority element first.
pub trait PriorityQueue<T>: Container<T> {
    fn offer(&mut self, value: T);

    /// Removes and returns the highest priority element, or [`None`] if the queue is empty.
    fn poll(&mut self) -> Option<T>;

    /// Returns the highest priority element without removing it.
    fn peek(&self) -> Option<&T>;

    /// Like [`peek`](PriorityQueue::peek), but treats an empty queue as an error.
    fn element(&self) -> Result<&T, EmptyContainer> {
        self.peek().ok_or(EmptyContainer)
    }
}
