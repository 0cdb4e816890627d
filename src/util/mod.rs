#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
pub mod error;
#[cfg(feature = "fs")]
pub mod fs;
pub mod panic;
pub mod result;
