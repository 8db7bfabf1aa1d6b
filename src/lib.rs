//! This crate is a collection of abstract data types which report their outcomes through status
//! queries rather than panics or [`Result`]s.
//!
//! # Purpose
//! Each collection here is specified as a set of commands (which change state), queries (which
//! don't) and status queries (which report how the last command or query went). Rather than
//! panicking when a pre-condition isn't met, an operation does nothing, records a status and
//! returns. Writing the collections this way forces every failure mode to be named up front, and
//! keeps the happy path of each operation free of error handling.
//!
//! # Collections
//! - [`DynamicArray`](contiguous::DynamicArray): a growable array with a single cursor, which
//!   grows by a factor of 2 and shrinks by a factor of 1.5 once it is less than half full.
//! - [`BoundedStack`](contiguous::BoundedStack): a LIFO stack with a fixed upper bound, built on
//!   DynamicArray.
//! - [`HashTable`](hash::HashTable): a fixed-capacity multiset, with either linear probing or
//!   separate chaining for collisions.
//! - [`PowerSet`](hash::PowerSet): a set built on HashTable, with intersection, union and
//!   difference.
//! - [`NativeDictionary`](hash::NativeDictionary): a fixed-capacity key-value map.
//! - [`BloomFilter`](bloom::BloomFilter): a probabilistic membership filter for strings.
//! - [`LinkedList`](linked::LinkedList) and [`TwoWayList`](linked::TwoWayList): lists which are
//!   navigated and edited through a single cursor, which can only move left in a TwoWayList.
//! - [`Queue`](linked::Queue) and [`Deque`](linked::Deque): FIFO and double-ended queues.
//!
//! # Error Handling
//! Every status is an enum with a `Nil` variant (the operation hasn't been invoked) and an `Ok`
//! variant, plus one variant per failure. All of them implement [`Status`](status::Status), so a
//! caller that would rather use `?` can convert the latest status into a
//! [`StatusError`](status::StatusError).
//!
//! A few conditions can't sensibly be reported as a status, such as an allocation that would
//! exceed [`isize::MAX`] bytes, or a Bloom filter with no bits. These panic instead, and are
//! documented under `# Panics`.
//!
//! # Dependencies
//! None of the collections rely on [`Vec`] or [`std::collections`]. Everything is stored either
//! in an [`Array`](contiguous::Array) or in individually allocated linked nodes. Reallocations
//! and failed insertions are logged through `tracing`, and some derive macros are used to remove
//! the need for some very repetitive programming.
//!
//! # Features
//! Each family of collections can be disabled with a cargo feature: `contiguous`, `hash`, `bloom`
//! and `linked`. All of them are enabled by default.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod contiguous;
pub mod status;

#[cfg(feature = "hash")]
pub mod hash;

#[cfg(feature = "bloom")]
pub mod bloom;

#[cfg(feature = "linked")]
pub mod linked;

pub(crate) mod util;
