//! Various general-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also concepts
//! such as allocations, iterators, hashing and tree rotations.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality. The rest share their contracts
//! through the capability traits in [`traits`].
//!
//! Every collection counts its structural changes, so a cursor which outlives a change made
//! somewhere else notices on its next step and returns an error instead of a stale element.

#[cfg(any(feature = "linked", feature = "hash", feature = "binary-tree"))]
pub(crate) mod arena;
#[cfg(feature = "binary-tree")]
pub mod binary_tree;
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
pub mod traits;
