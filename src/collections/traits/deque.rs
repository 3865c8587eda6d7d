use super::Container;
use crate::util::error::EmptyContainer;

/// A double-ended queue.
///
/// The `pop_*`, `front` and `back` methods use [`None`] to signal an empty Deque, while the
/// `remove_*`, `first` and `last` methods treat it as an error.
pub trait Deque<T>: Container<T> {
    fn push_front(&mut self, value: T);

    fn push_back(&mut self, value: T);

    fn pop_front(&mut self) -> Option<T>;

    fn pop_back(&mut self) -> Option<T>;

    fn front(&self) -> Option<&T>;

    fn back(&self) -> Option<&T>;

    fn remove_front(&mut self) -> Result<T, EmptyContainer> {
        self.pop_front().ok_or(EmptyContainer)
    }

    fn remove_back(&mut self) -> Result<T, EmptyContainer> {
        self.pop_back().ok_or(EmptyContainer)
    }

    fn first(&self) -> Result<&T, EmptyContainer> {
        self.front().ok_or(EmptyContainer)
    }

    fn last(&self) -> Result<&T, EmptyContainer> {
        self.back().ok_or(EmptyContainer)
    }
}
