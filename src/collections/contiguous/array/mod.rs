//! A module containing [`Array`] and associated types.
//!
//! [`IntoIter`] is shared with [`Vector`](super::Vector) for owned iteration. Borrowed iteration
//! uses [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) via
//! [`Deref<Target = [T]>`](std::ops::Deref).

mod array;
mod iter;
mod tests;

pub use array::*;
pub use iter::*;
