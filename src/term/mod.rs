//! Printing arrays of strings in columns sized to the terminal, the way `ls` does.

mod columns;
#[cfg(all(feature = "fs", target_os = "linux"))]
mod size;
mod tests;

pub use columns::*;
#[cfg(all(feature = "fs", target_os = "linux"))]
pub use size::*;
