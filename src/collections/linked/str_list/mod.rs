//! Helpers for [`LinkedList`](super::LinkedList)s whose payloads are strings: joining, printing,
//! searching and pattern-based filtering.
//!
//! Everything here is written against the public API of the list, so it applies to any payload
//! implementing [`AsRef<str>`], whether that's [`String`], `&str` or something else. Vacant nodes
//! are skipped throughout.
//!
//! # Patterns
//! Filtering by pattern goes through the [`Matcher`] trait. [`filter_regex`] compiles a
//! [`Regex`](regex::Regex) for the duration of a single call, so nothing is cached between calls.
//!
//! [`filter_regex`]: super::LinkedList::filter_regex

mod error;
mod matcher;
mod str_list;
mod tests;

pub use error::*;
pub use matcher::*;
pub use str_list::*;
