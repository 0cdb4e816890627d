//! A small utility library built around a singly linked list.
//!
//! # Purpose
//! The heart of this crate is [`LinkedList`](collections::linked::LinkedList): a chain of
//! exclusively owned [`Node`](collections::linked::Node)s which callers may detach, splice back in
//! and filter in place. Everything else is built on top of it, or alongside it:
//! - [`collections::linked::str_list`]: joining, printing, searching and regex filtering for
//!   lists of strings.
//! - [`fs`]: directory listings returned as lists of names or paths.
//! - [`term`]: printing arrays of strings in columns, like `ls`.
//! - [`strings`]: string building with exact allocation.
//! - [`config`]: a parser for `key = value` configuration files.
//! - [`collections::bitset`]: a packed, fixed-size bit set.
//!
//! # Ownership
//! A list owns its nodes and each node owns its payload. A payload leaves the list only by being
//! popped, taken out of its node, or returned from [`free_nodes`]. Arrays produced by
//! [`to_array`] borrow from the list, so the list can't be dropped while one is in use.
//!
//! # Error Handling
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error). Absence is never an error: an empty list pops as
//! [`Popped::Empty`](collections::linked::Popped::Empty) and a failed search is [`None`].
//!
//! Methods which can only fail on allocation come in pairs, such as [`join`] and [`try_join`]. The
//! former panics, the latter returns an
//! [`OutOfMemory`](collections::linked::list::OutOfMemory) error. Pushing a node aborts on
//! allocation failure, like any other [`Box`].
//!
//! # Dependencies
//! The [`fs`] module and terminal size query rely on `libc` for their thin syscall wrappers. This
//! crate also depends on `derive_more` for its error types, `regex` for pattern filtering and
//! `log` for reporting problems that it recovers from.
//!
//! [`free_nodes`]: collections::linked::LinkedList::free_nodes
//! [`to_array`]: collections::linked::LinkedList::to_array
//! [`join`]: collections::linked::LinkedList::join
//! [`try_join`]: collections::linked::LinkedList::try_join

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod config;
#[cfg(feature = "fs")]
pub mod fs;
pub mod strings;
pub mod term;

pub(crate) mod util;
