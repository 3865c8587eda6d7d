//! Hash-based collection types: [`HashSet`], which chains colliding elements within each bucket,
//! and [`LinkedHashSet`], which additionally remembers insertion order.
//!
//! Both tables start with 16 buckets, double whenever they reach three quarters full and keep the
//! hash of every element alongside it, so that growing only moves elements between buckets.

pub mod linked_set;
pub mod set;
mod table;

#[doc(inline)]
pub use linked_set::LinkedHashSet;
#[doc(inline)]
pub use set::HashSet;
