//! A toolkit of comparator-driven, in-memory containers: a growable array list, a singly linked
//! list with merge sort, an unbalanced binary search tree with a navigable cursor, and a set built
//! on top of the list types.
//!
//! # Ordering
//! None of the containers here require their element type to implement [`Ord`]. Instead, every
//! container instance stores a [`Comparator`](compare::Comparator) — a three-way comparison
//! supplied by the caller at construction. All ordering, searching, deduplication and set algebra
//! derive from that single function, so two containers of the same element type are free to order
//! it differently.
//!
//! # Error Handling
//! Failures are returned as strongly typed error values, using enums for static dispatch rather
//! than dynamic, with structs (often ZSTs) that implement [`Error`](std::error::Error). Accessors
//! like `at`, `min` or `peek` return [`Result`]s; mutators whose only failure mode is an invalid
//! index (`remove_at`, `replace_at`) signal it with `false` and leave the container untouched.
//! The one unrecoverable condition is a memory layout exceeding [`isize::MAX`], which panics the
//! same way the standard collections do.
//!
//! # Dependencies
//! Contiguous storage is written directly on top of [`std::alloc`] rather than [`Vec`] — the point
//! of the crate is the containers themselves, so they own their allocations, growth policy and
//! drop behavior. The only runtime dependency is a derive macro crate that removes some very
//! repetitive error-type programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod compare;

pub(crate) mod util;
