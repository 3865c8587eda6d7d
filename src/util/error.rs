//! Error types shared by every collection in this crate.
//!
//! Each condition is its own (mostly zero-sized) struct, so that methods can return exactly the
//! error they are able to produce. [`CollectionError`] unifies them for callers that don't care.

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the valid range for the collection. For lookups the valid range is
/// `[0, len)`, for insertions it is `[0, len]`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// A method requiring an element was called on an empty collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Attempted to take an element from an empty collection!")]
pub struct EmptyContainer;

/// An argument was rejected, such as a range with its bounds reversed.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Invalid argument: {reason}")]
pub struct InvalidArgument {
    pub reason: &'static str,
}

/// A cursor noticed that its collection was structurally modified by something other than the
/// cursor itself.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Collection was modified outside of this cursor! (expected {expected}, found {found})")]
pub struct ConcurrentStructuralChange {
    pub expected: u64,
    pub found: u64,
}

/// The requested capacity can't be represented in memory.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    IndexOutOfRange(IndexOutOfRange),
    EmptyContainer(EmptyContainer),
    InvalidArgument(InvalidArgument),
    ConcurrentStructuralChange(ConcurrentStructuralChange),
    CapacityOverflow(CapacityOverflow),
}

/// Returned when a cursor is asked to remove an element before yielding one, or twice in a row.
pub(crate) const NOTHING_TO_REMOVE: InvalidArgument = InvalidArgument {
    reason: "cursor has no current element to remove",
};
