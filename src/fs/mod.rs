//! Directory listing built on [`LinkedList`](crate::collections::linked::LinkedList)s of strings.
//!
//! This module relies on `libc` for thin wrappers around `opendir(3)`, `readdir(3)` and `stat(2)`,
//! mapping `errno` onto strongly typed errors. Listings come back as a
//! [`StrList`](crate::collections::linked::StrList) whose payloads are either entry names or full
//! paths, see [`Naming`].
#![cfg(target_os = "linux")]

mod dir_stream;
mod error;
mod file_type;
mod filters;
mod listing;
mod metadata;
mod tests;

pub use dir_stream::*;
pub use error::*;
pub use file_type::*;
pub use filters::*;
pub use listing::*;
pub use metadata::*;
