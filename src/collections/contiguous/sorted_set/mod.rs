//! A module containing [`SortedArraySet`] and its associated types.

mod cursor;
mod iter;
mod sorted_set;

pub use cursor::*;
pub use sorted_set::*;
