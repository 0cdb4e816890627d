//! Parsing for simple `key = value` configuration files.
//!
//! Blank lines and lines starting with `#` are ignored. Comments must be on a line by themselves.
//! Every other line is split at its first `=`: the key is everything before it and may contain
//! any character except `=`, the value is everything after it up to the end of the line. Both are
//! trimmed of surrounding whitespace.
//!
//! ```text
//! # This is a comment, and the following is a valid statement:
//! key = my value till the end
//!
//! # The following is likely wrong:
//! key two = "This is probably not what you want"
//! ```
//!
//! Values are stored into a [`ConfigTable`] of known keys, which is sorted so that each key can be
//! found by binary search.

mod config_table;
mod error;

pub use config_table::*;
pub use error::*;
