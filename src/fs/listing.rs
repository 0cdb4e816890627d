use super::{DirError, DirStream, FileType, ListError, metadata};
use crate::collections::linked::StrList;
use crate::collections::linked::str_list::compile;
use crate::strings;

/// How each directory entry is named in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Naming {
    /// Just the name of the entry within the directory.
    FileName,
    /// The directory path joined with the name of the entry.
    FullPath,
}

fn entry_path(dir: &str, name: &str) -> String {
    let sep = if dir.ends_with('/') { "" } else { "/" };
    strings::concat(&[dir, sep, name])
}

/// Lists every entry of the directory at `path`, `.` and `..` included, in the order the OS returns
/// them.
pub fn read_directory(path: &str, naming: Naming) -> Result<StrList, DirError> {
    DirStream::open(path)?
        .map(|entry| {
            entry.map(|name| match naming {
                Naming::FileName => name,
                Naming::FullPath => entry_path(path, &name),
            })
        })
        .collect()
}

/// Lists the entries of the directory at `path` which satisfy `predicate`. The predicate receives
/// each entry named according to `naming`.
pub fn read_directory_filter<F>(path: &str, naming: Naming, mut predicate: F) -> Result<StrList, DirError>
where
    F: FnMut(&str) -> bool,
{
    let mut list = read_directory(path, naming)?;
    let retained = list.filter(|entry| predicate(entry.as_str()));
    log::debug!("{retained} entries of '{path}' retained");
    Ok(list)
}

/// Lists the entries of the directory at `path` which match the regular expression `pattern`. The
/// pattern is compiled before the directory is opened.
pub fn read_directory_filter_regex(path: &str, pattern: &str, naming: Naming) -> Result<StrList, ListError> {
    let regex = compile(pattern)?;
    Ok(read_directory_filter(path, naming, |entry| regex.is_match(entry))?)
}

pub fn get_filenames(path: &str) -> Result<StrList, DirError> {
    read_directory(path, Naming::FileName)
}

pub fn get_filepaths(path: &str) -> Result<StrList, DirError> {
    read_directory(path, Naming::FullPath)
}

pub fn get_filenames_filter<F: FnMut(&str) -> bool>(path: &str, predicate: F) -> Result<StrList, DirError> {
    read_directory_filter(path, Naming::FileName, predicate)
}

pub fn get_filepaths_filter<F: FnMut(&str) -> bool>(path: &str, predicate: F) -> Result<StrList, DirError> {
    read_directory_filter(path, Naming::FullPath, predicate)
}

pub fn get_filenames_filter_regex(path: &str, pattern: &str) -> Result<StrList, ListError> {
    read_directory_filter_regex(path, pattern, Naming::FileName)
}

pub fn get_filepaths_filter_regex(path: &str, pattern: &str) -> Result<StrList, ListError> {
    read_directory_filter_regex(path, pattern, Naming::FullPath)
}

/// Lists the full paths of the regular files in `dir` whose *name* matches `pattern`.
///
/// Every entry is inspected, so a single entry which can't be (such as a dangling symlink) fails
/// the whole listing.
pub fn regex_files(pattern: &str, dir: &str) -> Result<StrList, ListError> {
    let regex = compile(pattern)?;
    regular_files(dir, |name, _| regex.is_match(name))
}

/// Lists the full paths of the regular files in `dir` modified after `age` (in seconds since the
/// epoch).
///
/// Every entry is inspected, so a single entry which can't be (such as a dangling symlink) fails
/// the whole listing.
pub fn younger_files(age: i64, dir: &str) -> Result<StrList, ListError> {
    regular_files(dir, |_, modified| modified > age)
}

fn regular_files<F>(dir: &str, mut accept: F) -> Result<StrList, ListError>
where
    F: FnMut(&str, i64) -> bool,
{
    DirStream::open(dir)?
        .map(|entry| -> Result<Option<String>, ListError> {
            let name = entry?;
            let path = entry_path(dir, &name);
            let meta = metadata(&path)?;

            let accepted = meta.file_type == FileType::Regular && accept(&name, meta.modified);
            Ok(accepted.then_some(path))
        })
        .filter_map(Result::transpose)
        .collect()
}
