//! A module containing [`BinaryHeap`], a priority queue with an injectable order, and its
//! associated types.

mod binary_heap;
mod cursor;
mod iter;
mod tests;

pub use binary_heap::*;
pub use cursor::*;
