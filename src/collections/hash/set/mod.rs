//! A module containing [`HashSet`] and its associated types.

mod cursor;
mod hash_set;
mod iter;
mod tests;

pub use cursor::*;
pub use hash_set::*;
pub use iter::*;
