//! A module containing [`LinkedDeque`], a doubly linked double-ended queue, and its associated
//! types.

mod cursor;
mod deque;
mod iter;
mod node;

pub use cursor::*;
pub use deque::*;
pub use iter::*;
pub(crate) use node::*;
