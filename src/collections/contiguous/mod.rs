//! Contiguous collection types. [`Array`] is a fixed-size block of memory which all of the other
//! types here are built on: [`Vector`] grows at the back, [`RingDeque`] wraps around at both ends,
//! and [`BinaryHeap`] and [`SortedArraySet`] keep a [`Vector`] in heap or sorted order.
#![warn(missing_docs)]

pub mod array;
pub mod binary_heap;
pub mod ring_deque;
pub mod sorted_set;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use binary_heap::BinaryHeap;
#[doc(inline)]
pub use ring_deque::RingDeque;
#[doc(inline)]
pub use sorted_set::SortedArraySet;
#[doc(inline)]
pub use vector::Vector;
