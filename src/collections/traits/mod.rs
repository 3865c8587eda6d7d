//! Capability traits shared by the collections in this crate.
//!
//! None of the collections share an implementation, only contracts, so each capability is its own
//! trait and every type implements the ones that fit. Iteration isn't a trait here: every
//! collection implements [`IntoIterator`] for both itself and a reference to itself instead.

mod comparator;
mod container;
mod deque;
mod map;
mod queue;
mod sequence;
mod set;

pub use comparator::*;
pub use container::*;
pub use deque::*;
pub use map::*;
pub use queue::*;
pub use sequence::*;
pub use set::*;
