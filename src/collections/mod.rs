//! General-purpose collection types.
//!
//! # Purpose
//! These are deliberately small: a singly linked list whose nodes can be detached and spliced
//! around by their owner, and a packed bit set. Everything else in the crate (directory listing,
//! column printing) is built on top of [`LinkedList`](linked::LinkedList).

pub mod bitset;
pub mod linked;
