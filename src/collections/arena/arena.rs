use std::mem;
use std::ops::{Index, IndexMut};

use crate::collections::contiguous::Vector;
use crate::util::error::IndexOutOfRange;
use crate::util::result::ResultExtension;

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

/// A slab of values addressed by the index they were inserted at. Indices stay valid until the
/// value is removed, after which the slot is reused by a later insertion.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vector<Slot<T>>,
    free: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub const fn new() -> Arena<T> {
        Arena {
            slots: Vector::new(),
            free: None,
            len: 0,
        }
    }

    pub fn with_cap(cap: usize) -> Arena<T> {
        Arena {
            slots: Vector::with_cap(cap),
            free: None,
            len: 0,
        }
    }

    /// Returns the number of occupied slots.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Stores `value` in a free slot, or a new one, returning its index.
    pub fn insert(&mut self, value: T) -> usize {
        self.len += 1;

        match self.free {
            Some(index) => {
                let old = mem::replace(&mut self.slots[index], Slot::Occupied(value));
                if let Slot::Vacant { next_free } = old {
                    self.free = next_free;
                }
                index
            },
            None => {
                self.slots.push(Slot::Occupied(value));
                self.slots.len() - 1
            },
        }
    }

    /// Removes and returns the value at `index`, freeing the slot for reuse.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let slot = self.slots.try_get(index).ok()?;
        if let Slot::Vacant { .. } = slot {
            return None;
        }

        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied(value) => {
                self.free = Some(index);
                self.len -= 1;
                Some(value)
            },
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        match self.slots.try_get(index).ok()? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.slots.len() {
            return None;
        }
        match &mut self.slots[index] {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Drops every value at once and forgets all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Arena<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let len = self.slots.len();
        self.get(index).ok_or(IndexOutOfRange { index, len }).throw()
    }
}

impl<T> IndexMut<usize> for Arena<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.slots.len();
        self.get_mut(index).ok_or(IndexOutOfRange { index, len }).throw()
    }
}
