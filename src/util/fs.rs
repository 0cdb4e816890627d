//! Thin helpers over `libc` shared by the filesystem and terminal modules.

use std::ffi::CString;
use std::io;

use derive_more::{Display, Error};

/// Returns the current value of `errno` for the calling thread.
pub fn err_no() -> i32 {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// A path contained an interior nul byte and can't be passed to the OS.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("path contains an interior nul byte")]
pub struct NulPathError;

/// Converts a path into the nul-terminated form expected by libc.
pub fn c_path(path: &str) -> Result<CString, NulPathError> {
    CString::new(path).map_err(|_| NulPathError)
}
