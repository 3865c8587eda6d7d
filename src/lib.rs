//! This crate is my collection of data structures written from scratch: growable and fixed arrays,
//! ring buffers, heaps, sorted sets, linked deques, hash sets and three kinds of self-balancing
//! binary search tree.
//!
//! # Purpose
//! This repo / crate is a learning project, with no expectation for it to be used in production.
//! Writing these data structures helps me to understand and appreciate them properly, along with
//! the invariants that keep them fast, such as AVL heights, red-black colorings and the way a splay
//! tree pulls whatever it touches up to the root.
//!
//! # Method
//! All data structures here are written based on my existing understanding and problem solving.
//! Rather than copying Rust's [`std`], this crate takes a lot of inspiration from it, especially
//! its APIs. None of the collections are built on [`Vec`] or [`std::collections`]: they all sit on
//! top of [`Array`](collections::contiguous::Array), a fixed block of memory managed by hand, or on
//! each other.
//!
//! Collections are grouped by how they store their elements:
//! - [`contiguous`](collections::contiguous): arrays, vectors, ring deques, binary heaps and
//!   sorted array sets.
//! - `linked`: a doubly linked deque whose nodes live in an index-addressed arena.
//! - `hash`: a chained hash set and an insertion-ordered variant.
//! - `binary_tree`: AVL, red-black and splay tree maps.
//!
//! Everything beyond the contiguous family sits behind a cargo feature (`linked`, `hash` and
//! `binary-tree`), all enabled by default.
//!
//! # Error Handling
//! For a collections library, it is more ergonomic for some methods to panic, because users don't
//! want to be forced to handle an error every time they index into a Vector. So most fallible
//! accessors come in pairs: a method which panics with the error's message, and a `try_*` variant
//! which hands the same error back in a [`Result`]. Methods whose failure is routine, like a map
//! lookup, just return an [`Option`].
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error). They all live in [`error`].
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming, along with [`log`] for the odd trace message when a collection
//! reallocates.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

pub use util::error;
