#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A value that records every drop of itself (or of any clone) into a shared counter.
#[derive(Debug, Clone)]
pub struct DropCounter(pub Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far and resets the count.
    pub fn take(&self) -> usize {
        self.0.replace(0)
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZeroSizedType;
