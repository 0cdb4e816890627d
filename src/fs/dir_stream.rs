use std::ffi::CStr;
use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;
use std::thread;

use libc::DIR;

use super::{DirError, UnexpectedError};
use crate::util::fs::{c_path, err_no};

/// An open directory, yielding the name of each entry in the order the OS returns them, `.` and
/// `..` included. The directory is closed when this is dropped.
pub struct DirStream {
    dir: NonNull<DIR>,
}

impl DirStream {
    pub fn open(path: &str) -> Result<DirStream, DirError> {
        let pathname = c_path(path)?;

        // SAFETY: pathname is a valid nul-terminated string for the duration of the call.
        match NonNull::new(unsafe { libc::opendir(pathname.as_ptr()) }) {
            Some(dir) => Ok(DirStream { dir }),
            None => Err(DirError::from_errno(err_no())),
        }
    }
}

impl Iterator for DirStream {
    type Item = Result<String, DirError>;

    fn next(&mut self) -> Option<Self::Item> {
        // readdir only reports errors through errno, so it has to be cleared beforehand.
        // SAFETY: __errno_location always returns a valid pointer to this thread's errno.
        unsafe { *libc::__errno_location() = 0; }

        // SAFETY: self.dir was returned by opendir and hasn't been closed.
        let entry = unsafe { libc::readdir(self.dir.as_ptr()) };
        if entry.is_null() {
            return match err_no() {
                0 => None,
                e => Some(Err(DirError::from_errno(e))),
            };
        }

        // SAFETY: readdir returned a valid entry, which stays valid until the next call on this
        // stream. d_name is nul-terminated.
        let name = unsafe { CStr::from_ptr((*entry).d_name.as_ptr()) };
        Some(Ok(name.to_string_lossy().into_owned()))
    }
}

impl Drop for DirStream {
    fn drop(&mut self) {
        // SAFETY: self.dir was returned by opendir and is closed exactly once, here.
        if unsafe { libc::closedir(self.dir.as_ptr()) } == -1
            // Panic only if we aren't already, to prevent aborting an existing unwind.
            && !thread::panicking()
        {
            panic!("error while closing directory stream: {}", UnexpectedError(err_no()));
        }
    }
}

impl Debug for DirStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "DirStream({:p})", self.dir)
    }
}
