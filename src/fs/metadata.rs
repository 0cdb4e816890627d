use std::mem::MaybeUninit;

use libc::stat as Stat;

use super::{FileType, StatError};
use crate::util::fs::{c_path, err_no};

/// The parts of `stat(2)` used by the listing filters. Symlinks are followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub size: i64,           // st_size
    pub file_type: FileType, // st_mode
    pub mode: u32,           // st_mode
    pub modified: i64,       // st_mtime
}

impl Metadata {
    #[allow(clippy::unnecessary_cast)]
    pub(crate) const fn from_stat(raw: &Stat) -> Metadata {
        Metadata {
            size: raw.st_size as i64,
            file_type: FileType::from_stat_mode(raw.st_mode),
            mode: raw.st_mode,
            modified: raw.st_mtime as i64,
        }
    }
}

/// Reads the metadata of the file at `path`, following symlinks.
pub fn metadata(path: &str) -> Result<Metadata, StatError> {
    let pathname = c_path(path)?;

    let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
    // SAFETY: pathname is nul-terminated and raw_meta is valid for writes of a stat struct.
    if unsafe { libc::stat(pathname.as_ptr(), raw_meta.as_mut_ptr()) } == -1 {
        return Err(StatError::from_errno(err_no()));
    }
    // SAFETY: stat either initializes raw_meta or returns -1, which is handled above.
    let raw = unsafe { raw_meta.assume_init() };

    Ok(Metadata::from_stat(&raw))
}
