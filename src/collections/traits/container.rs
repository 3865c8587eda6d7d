/// The capabilities shared by every collection: a length, a way to empty it and a membership test.
///
/// For maps, `T` is the key type.
pub trait Container<T> {
    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element, releasing ownership of all of them at once.
    fn clear(&mut self);

    /// Returns true if the collection contains an element equal to `item`.
    fn contains(&self, item: &T) -> bool;
}
