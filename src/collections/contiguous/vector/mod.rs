//! A module containing [`Vector`] and associated types.
//!
//! Owned iteration uses [`IntoIter`], a re-export of [`array::IntoIter`](super::array::IntoIter).
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used
//! for borrowed iteration. [`Cursor`] provides fail-fast iteration with removal.
//!
//! [`Vector`] is also re-exported under the parent module.

mod cursor;
mod iter;
mod tests;
mod vector;

pub use cursor::*;
pub use iter::*;
pub use vector::*;
