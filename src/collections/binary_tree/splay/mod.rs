//! A module containing [`SplayTreeMap`] and its associated types.

mod iter;
mod node;
mod splay_tree_map;

pub use iter::*;
pub(crate) use node::*;
pub use splay_tree_map::*;
