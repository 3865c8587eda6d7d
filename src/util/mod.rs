#![warn(missing_docs)]

pub mod alloc;
pub mod error;
pub mod fmt;
pub mod hash;
pub(crate) mod mod_count;
pub mod panic;
pub mod result;
