//! Ordered maps backed by self-balancing binary search trees.
//!
//! Each map keeps its keys in ascending order and supports navigation to the nearest key on
//! either side of a probe. They differ in how they keep the tree shallow:
//! - [`AvlTreeMap`] stores the height of every subtree and rotates whenever two siblings differ by
//!   more than one.
//! - [`RbTreeMap`] colors its links red or black and keeps the black links evenly distributed.
//! - [`SplayTreeMap`] stores nothing extra and instead moves every accessed node to the root.
//!
//! All three share a [`Cursor`] which walks the keys in order and can remove entries as it goes.

pub mod avl;
mod cursor;
pub mod red_black;
pub mod splay;
pub(crate) mod tree;

#[doc(inline)]
pub use avl::AvlTreeMap;
pub use cursor::{Cursor, TreeNavigation};
#[doc(inline)]
pub use red_black::RbTreeMap;
#[doc(inline)]
pub use splay::SplayTreeMap;
