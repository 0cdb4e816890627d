//! A fixed-size set of bits, packed into machine words.

mod bit_set;
mod tests;

pub use bit_set::*;
