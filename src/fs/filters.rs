use std::cmp::Ordering;

use super::{FileType, Metadata, metadata};

fn file_type(path: &str) -> Option<FileType> {
    checked_metadata(path).map(|meta| meta.file_type)
}

fn checked_metadata(path: &str) -> Option<Metadata> {
    match metadata(path) {
        Ok(meta) => Some(meta),
        Err(error) => {
            log::warn!("can't stat '{path}': {error}");
            None
        },
    }
}

/// Returns true if `path` is a directory. Paths that can't be inspected are logged and count as
/// false.
pub fn is_dir(path: &str) -> bool {
    file_type(path) == Some(FileType::Directory)
}

/// Returns true if `path` is a regular file. Paths that can't be inspected are logged and count as
/// false.
pub fn is_regular(path: &str) -> bool {
    file_type(path) == Some(FileType::Regular)
}

/// Creates a predicate which compares the modification time of a path with `time` (in seconds
/// since the epoch). The predicate accepts a path when `mtime.cmp(&time) == ordering`.
///
/// ```no_run
/// # use std::cmp::Ordering;
/// # use cassava::fs::{get_filepaths_filter, modified};
/// let recent = get_filepaths_filter("/var/log", modified(Ordering::Greater, 1_700_000_000));
/// ```
pub fn modified(ordering: Ordering, time: i64) -> impl Fn(&str) -> bool {
    move |path| checked_metadata(path).is_some_and(|meta| meta.modified.cmp(&time) == ordering)
}
