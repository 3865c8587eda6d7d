//! A module containing [`LinkedHashSet`] and its associated types.

mod cursor;
mod iter;
mod linked_set;
mod tests;

pub use cursor::*;
pub use iter::*;
pub use linked_set::*;
