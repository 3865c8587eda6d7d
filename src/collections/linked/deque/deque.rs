use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Cursor, Ends, Iter, Node};
use crate::collections::arena::Arena;
use crate::collections::contiguous::Array;
use crate::collections::traits::{Container, Deque, Sequence};
use crate::util::error::IndexOutOfRange;
use crate::util::fmt::{DebugIter, write_list};
use crate::util::mod_count::ModCount;
use crate::util::result::ResultExtension;

use Ends::*;

/// A double-ended queue with links in both directions.
///
/// Nodes are stored in an arena and linked by index. Any index based access walks from whichever
/// end of the chain is closer.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedDeque.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `contains` | `O(n)` |
///
/// Removing through a [`Cursor`] is `O(1)`, since the cursor already holds the node.
pub struct LinkedDeque<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) ends: Ends,
    pub(crate) mods: ModCount,
}

impl<T> LinkedDeque<T> {
    /// Creates a new LinkedDeque with no elements.
    pub const fn new() -> LinkedDeque<T> {
        LinkedDeque {
            nodes: Arena::new(),
            ends: Empty,
            mods: ModCount::new(),
        }
    }

    /// Returns the length of the LinkedDeque.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the LinkedDeque contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        Some(&self.nodes[self.ends.head()?].value)
    }

    /// Returns a mutable reference to the first element, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        Some(&mut self.nodes[self.ends.head()?].value)
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        Some(&self.nodes[self.ends.tail()?].value)
    }

    /// Returns a mutable reference to the last element, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        Some(&mut self.nodes[self.ends.tail()?].value)
    }

    /// Add the provided element to the front of the LinkedDeque.
    pub fn push_front(&mut self, value: T) {
        let id = self.nodes.insert(Node {
            value,
            prev: None,
            next: self.ends.head(),
        });

        self.ends = match self.ends {
            Empty => Full { head: id, tail: id },
            Full { head, tail } => {
                self.nodes[head].prev = Some(id);
                Full { head: id, tail }
            },
        };
        self.mods.bump();
    }

    /// Add the provided element to the back of the LinkedDeque.
    pub fn push_back(&mut self, value: T) {
        let id = self.nodes.insert(Node {
            value,
            prev: self.ends.tail(),
            next: None,
        });

        self.ends = match self.ends {
            Empty => Full { head: id, tail: id },
            Full { head, tail } => {
                self.nodes[tail].next = Some(id);
                Full { head, tail: id }
            },
        };
        self.mods.bump();
    }

    /// Removes the first element and returns it, if the LinkedDeque isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink(self.ends.head()?)
    }

    /// Removes the last element and returns it, if the LinkedDeque isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.unlink(self.ends.tail()?)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedDeque.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        let id = self.seek(index)?;
        Ok(&self.nodes[id].value)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedDeque.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        let id = self.seek(index)?;
        Ok(&mut self.nodes[id].value)
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedDeque.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfRange> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Inserts `value` so that it ends up at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedDeque.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`. Valid indices are `[0, len]`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        let len = self.len();
        match index {
            0 => self.push_front(value),
            val if val == len => self.push_back(value),
            val if val > len => return Err(IndexOutOfRange { index, len }),
            val => {
                let after = self.seek(val)?;
                let before = self.nodes[after].prev;

                let id = self.nodes.insert(Node {
                    value,
                    prev: before,
                    next: Some(after),
                });

                self.nodes[after].prev = Some(id);
                // The node being displaced isn't the head, so it always has a predecessor.
                if let Some(before) = before {
                    self.nodes[before].next = Some(id);
                }
                self.mods.bump();
            },
        }
        Ok(())
    }

    /// Removes and returns the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedDeque.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        let len = self.len();
        let id = self.seek(index)?;
        self.unlink(id).ok_or(IndexOutOfRange { index, len })
    }

    /// Returns true if the LinkedDeque contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == item)
    }

    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == item)
    }

    pub fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|element| element == item)
    }

    /// Removes the first element (from the front) equal to `item`. Returns true if one was found.
    pub fn remove_first_occurrence(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let mut next = self.ends.head();
        while let Some(id) = next {
            let node = &self.nodes[id];
            if node.value == *item {
                return self.unlink(id).is_some();
            }
            next = node.next;
        }
        false
    }

    /// Removes the last element (from the front) equal to `item`. Returns true if one was found.
    pub fn remove_last_occurrence(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let mut prev = self.ends.tail();
        while let Some(id) = prev {
            let node = &self.nodes[id];
            if node.value == *item {
                return self.unlink(id).is_some();
            }
            prev = node.prev;
        }
        false
    }

    /// Keeps only the elements for which `f` returns true, preserving their order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut next = self.ends.head();
        while let Some(id) = next {
            let node = &self.nodes[id];
            next = node.next;
            if !f(&node.value) {
                self.unlink(id);
            }
        }
    }

    /// Removes all elements, dropping them at once.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.ends = Empty;
        self.mods.bump();
    }

    /// Returns a double-ended iterator over the elements, from front to back. Use
    /// [`rev`](Iterator::rev) to iterate from back to front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.ends, self.len())
    }

    /// Copies every element into a new [`Array`], from front to back.
    pub fn to_array(&self) -> Array<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns a fail-fast [`Cursor`] positioned before the front element.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.ends.head(), self.mods.get())
    }

    /// Finds the node at `index`, walking from the nearer end of the chain.
    pub(crate) fn seek(&self, index: usize) -> Result<usize, IndexOutOfRange> {
        let len = self.len();
        let out_of_range = IndexOutOfRange { index, len };

        let Full { head, tail } = self.ends else {
            return Err(out_of_range);
        };
        if index >= len {
            return Err(out_of_range);
        }

        let mut id;
        if index <= len / 2 {
            id = head;
            for _ in 0..index {
                id = self.nodes[id].next.ok_or(out_of_range)?;
            }
        } else {
            id = tail;
            for _ in index + 1..len {
                id = self.nodes[id].prev.ok_or(out_of_range)?;
            }
        }
        Ok(id)
    }

    /// Detaches the node `id` from its neighbours and the ends of the chain, then frees it. Returns
    /// [`None`] if `id` isn't a live node.
    pub(crate) fn unlink(&mut self, id: usize) -> Option<T> {
        let node = self.nodes.remove(id)?;

        if let Some(prev) = node.prev {
            self.nodes[prev].next = node.next;
        }
        if let Some(next) = node.next {
            self.nodes[next].prev = node.prev;
        }

        if let Full { head, tail } = self.ends {
            let head = if head == id { node.next } else { Some(head) };
            let tail = if tail == id { node.prev } else { Some(tail) };
            self.ends = Ends::from_parts(head, tail);
        }

        self.mods.bump();
        Some(node.value)
    }
}

impl<T: PartialEq> Container<T> for LinkedDeque<T> {
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        LinkedDeque::clear(self);
    }

    fn contains(&self, item: &T) -> bool {
        LinkedDeque::contains(self, item)
    }
}

impl<T: PartialEq> Deque<T> for LinkedDeque<T> {
    fn push_front(&mut self, value: T) {
        LinkedDeque::push_front(self, value);
    }

    fn push_back(&mut self, value: T) {
        LinkedDeque::push_back(self, value);
    }

    fn pop_front(&mut self) -> Option<T> {
        LinkedDeque::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        LinkedDeque::pop_back(self)
    }

    fn front(&self) -> Option<&T> {
        LinkedDeque::front(self)
    }

    fn back(&self) -> Option<&T> {
        LinkedDeque::back(self)
    }
}

impl<T: PartialEq> Sequence<T> for LinkedDeque<T> {
    fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.try_get(index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfRange> {
        self.try_set(index, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        self.try_insert(index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        self.try_remove(index)
    }

    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        LinkedDeque::index_of(self, item)
    }

    fn last_index_of(&self, item: &T) -> Option<usize> {
        LinkedDeque::last_index_of(self, item)
    }
}

impl<T> Index<usize> for LinkedDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = LinkedDeque::new();
        deque.extend(iter);
        deque
    }
}

impl<T: Clone> Clone for LinkedDeque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedDeque<T> {}

impl<T: Hash> Hash for LinkedDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedDeque")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}
