//! A module containing [`RingDeque`], a double-ended queue stored in a circular buffer, and its
//! associated types.

mod cursor;
mod iter;
mod ring_deque;
mod tests;

pub use cursor::*;
pub use iter::*;
pub use ring_deque::*;
