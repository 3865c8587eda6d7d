//! Linked collection types. The nodes of every linked collection live in a crate-private arena and
//! refer to each other by index, so relinking never needs unsafe code.

pub mod deque;

#[doc(inline)]
pub use deque::LinkedDeque;
