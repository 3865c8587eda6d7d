//! A module containing [`RbTreeMap`] and its associated types.

mod rb_tree_map;
mod iter;
mod node;
mod tests;

pub use rb_tree_map::*;
pub use iter::*;
pub(crate) use node::*;
