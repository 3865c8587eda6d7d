//! Flat node storage for the linked structures, which address their nodes by stable indices
//! instead of pointers.

mod arena;
mod tests;

pub(crate) use arena::*;
