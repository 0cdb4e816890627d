//! String building helpers: concatenation and joining with exact allocation, substrings, prefix
//! tests and byte-wise sorting.

mod error;
mod strings;
mod tests;

pub use error::*;
pub use strings::*;
